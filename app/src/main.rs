use std::process::ExitCode;

fn main() -> ExitCode {
    krishnawisdom_lib::run()
}
