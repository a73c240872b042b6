//! The three scripture excerpts that are always part of the corpus.

pub const BHAGAVAD_GITA_LABEL: &str = "Bhagavad Gita";
pub const UPANISHADS_LABEL: &str = "Upanishads";
pub const BHAGAVATA_PURANA_LABEL: &str = "Bhagavata Purana";

pub const BHAGAVAD_GITA: &str = "CHAPTER 2: Sankhya Yoga
The Blessed Lord said: You grieve for those who should not be grieved for; yet you speak words of wisdom.
The wise grieve neither for the living nor for the dead. Never was there a time when I did not exist,
nor you, nor all these kings; nor in the future shall any of us cease to be. Just as the embodied soul
continuously passes from childhood to youth to old age, similarly, at the time of death, the soul passes
into another body. The wise are not deluded by this change. Those who are seers of the truth have concluded
that the impermanent has no reality and the eternal never ceases to be. The soul is unborn, eternal,
everlasting, primeval; it is not slain when the body is slain.

CHAPTER 3: Karma Yoga
One who controls the senses by the mind and engages the active senses in works of devotion without attachment
is superior. Perform your prescribed duties, for action is better than inaction. Even the maintenance of your
body would not be possible without action. Work done as a sacrifice for the Supreme Lord has to be performed;
otherwise work causes bondage in this material world. Therefore, O Arjuna, perform your prescribed duties for
His satisfaction, and in that way you will always remain free from bondage.";

pub const UPANISHADS: &str = "Katha Upanishad:
The soul is born and unfolds in a body, with dreams and desires and the food of life. And then it is reborn in new bodies,
in accordance with its former works. The soul is immortal; it is never born and never dies. It is in the changeless,
eternal, and indestructible. Weapons cannot cut it, fire cannot burn it, water cannot wet it, wind cannot dry it.
The soul is beyond all power of these elements.

Isha Upanishad:
The entire universe is pervaded by the Supreme Being, who is both within and without, unchanging and without form.
Therefore, find your enjoyment in renunciation; do not covet what belongs to others. Perform your duties in this world
with detachment, and you will avoid bondage. The face of truth remains hidden behind a circle of gold. Unveil it, O Lord of Light,
so that I who love the truth may see it.";

pub const BHAGAVATA_PURANA: &str = "Book 10: The Supreme Personality of Godhead
The Supreme Lord said: My dear devotees, those who fix their minds on Me and engage in My loving service,
giving up all material desires, are very dear to Me. One who is thus transcendentally situated at once realizes the Supreme Brahman.
He never laments nor desires to have anything; he is equally disposed to every living entity. In that state he attains pure devotional service unto Me.

Book 11: General History
The Supreme Lord said: The three modes of material nature\u{2014}goodness, passion, and ignorance\u{2014}bind the eternal soul to the perishable body.
O Uddhava, one who has completely surrendered unto Me can easily overcome these three modes and become situated in pure spiritual existence.
Such a devotee of Mine, fixed in transcendental knowledge, is not subject to rebirth even when he gives up his present body.";

pub fn literal_scriptures() -> [(&'static str, &'static str); 3] {
    [
        (BHAGAVAD_GITA_LABEL, BHAGAVAD_GITA),
        (UPANISHADS_LABEL, UPANISHADS),
        (BHAGAVATA_PURANA_LABEL, BHAGAVATA_PURANA),
    ]
}
