use super::Bucket;

pub const GESTURES: [&str; 6] = [
    "smiles compassionately",
    "gazes with infinite wisdom",
    "places a hand gently on your shoulder",
    "chuckles softly",
    "nods knowingly",
    "closes eyes in deep contemplation",
];

pub const OPENINGS: [&str; 5] = [
    "Dear seeker of truth,",
    "Beloved child of eternity,",
    "O noble soul,",
    "Dear one,",
    "My precious devotee,",
];

const ANXIETY: &str = "I see the storms of worry swirling within your heart. Remember when Arjuna stood trembling on Kurukshetra?
His bow slipped from paralyzed hands, his vision clouded by doubt - much like yours in this moment.
Yet I whispered to him then what I whisper to you now: 'The soul is eternal, untouched by these temporal winds.'

Consider the mighty banyan tree - when monsoon winds rage, its branches may tremble, leaves may scatter,
yet its roots remain anchored deep in the earth's silent wisdom. Your true Self is such a tree, beloved.
These anxieties are but passing seasons in the eternal garden of your being.

**Practical wisdom**: Each dawn, before the world stirs, sit beneath your own inner kalpavriksha.
Breathe in stillness for seven breaths, exhale turmoil for seven more. Then ask:
'What small act of service can I perform today to shift from worry to worship?'
For in selfless action, the mind finds its anchor.

The light within you has weathered countless storms. Trust its constancy.";

const PURPOSE: &str = "The eternal question that stirs in every heart! Do you recall young Dhruva, who sought greatness?
He scaled mountains of ambition only to find emptiness at every peak - until he stilled his restless seeking
and discovered the North Star within his own soul.

Your purpose, dear seeker, isn't a destination to reach but a quality of being to embody.
The potter finds purpose not in creating perfect pots but in the sacred dance of hands upon clay.
The river finds purpose not in reaching the ocean but in the singing journey between banks.

**Practical wisdom**: For seven days, keep a 'light journal'. Note moments when you felt:
'Here, I am home.' Patterns will emerge like constellations in the night sky.
Follow these stars, and you'll find your unique song in creation's symphony.

Remember, even I took joy in herding cows in Vrindavan. Divine purpose often wears humble garments.";

const PEACE: &str = "Peace is not the absence of storms but the depth of the ocean beneath them.
Observe the water - when winds rage, waves dance in frenzy upon the surface,
yet twenty feet below exists a realm of undisturbed silence. Such is your true nature.

Remember when I calmed the raging sea for my devotees? That same power resides within your breath.
The secret lies not in controlling external waves but in diving deep to your inner stillness.

**Practical wisdom**: Create a 'sanctuary of silence' each day. It need not be grand -
a corner with a single candle suffices. There, practice the three Rs:
1. Release thoughts like leaves upon a stream
2. Rest in the awareness beneath thinking
3. Remember 'I am that stillness'

When agitation visits, whisper to your heart: 'This too shall pass, but the witness remains.'
Your calm isn't fragile; it's the eternal bedrock of creation.";

const SORROW: &str = "Your sorrow is sacred, beloved. Do you know why the lotus chooses muddy waters to bloom?
Because it understands darkness as the womb of light. Your tears water seeds of wisdom
that will blossom in seasons you cannot yet imagine.

Remember Radha's viraha - her divine longing painted the skies with hues of separation,
yet each teardrop became a star in love's eternal constellation. Your pain too is transforming
into something luminous beyond your current sight.

**Practical wisdom**: When grief's tide surges, become the compassionate witness.
Light a ghee lamp and speak to your sorrow: 'I see you, I honor you, I release you.'
Then write one letter of gratitude to someone who once brought you joy.

The moon wanes but never disappears. Your light, though veiled, remains whole.
This darkness is but the universe holding you in its sacred womb.";

const LOVE: &str = "Love is the fundamental rhythm of creation. Not the fragile love that says 'I need you'
but the divine love that whispers 'I am you.' See how the Yamuna embraces every stone, root, and bank -
without possession, without condition.

Your heart's longing mirrors the gopis' divine madness - that exquisite ache to merge with the Beloved.
But understand: the love you seek outside already dwells within your own breast as your eternal essence.

**Practical wisdom**: Practice seeing the divine in the ordinary. When you take your morning chai,
offer it first to the divine presence within your guest. When frustration arises with a loved one,
whisper: 'The Krishna in me greets the Krishna in you.'

True love isn't found; it's recognized. It's the ocean awakening to its own wetness.";

const FEAR: &str = "Fear is a shadow cast by the mind when it forgets the sun. Remember how the people of Vrindavan
trembled as Indra's storm battered their homes? I lifted Govardhan hill upon my smallest finger,
and beneath it they discovered that shelter had been waiting for them all along.

The serpent Kaliya once filled the Yamuna with poison and every heart with dread.
Yet when I danced upon his hoods, the river ran sweet again. What you fear has no power
over the one who dances in the present moment.

**Practical wisdom**: When fear rises, name it aloud and place your hand upon your heart.
Take one small step toward the thing you dread - only one - and offer that step to the Divine.
Courage is not the absence of trembling; it is walking while the knees tremble.

You are never alone on the path. The one who holds the mountain also holds you.";

const DEFAULT: &str = "Your question touches the eternal mystery. The answers you seek are like birds hidden in foliage -
they reveal themselves not through frantic searching but through patient stillness.

Remember Arjuna's dilemma on Kurukshetra? His confusion birthed the timeless wisdom of the Gita.
Your uncertainty now is the sacred ground where new understanding will blossom.

**Practical wisdom**: For three days, observe nature's wisdom. Watch how the river navigates obstacles,
how the tree accepts seasons, how the stars keep faith with darkness. Then ask:
'What would love do in this situation?' and wait for the answer that brings peace.

The divine dance continues in every atom of creation, and you are its cherished partner.
Trust the unfolding.";

pub fn body_for(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::Anxiety => ANXIETY,
        Bucket::Purpose => PURPOSE,
        Bucket::Peace => PEACE,
        Bucket::Sorrow => SORROW,
        Bucket::Love => LOVE,
        Bucket::Fear => FEAR,
        Bucket::Default => DEFAULT,
    }
}
