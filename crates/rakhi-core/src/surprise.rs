//! The surprise section: brothers' poems and the memory album.

use crate::achievements::{Achievement, AchievementSink};

/// A poem signed by one brother
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poem {
    pub author: &'static str,
    pub text: &'static str,
}

pub const POEMS: &[Poem] = &[
    Poem {
        author: "Baru",
        text: "Two stars that light my sky so wide,\n\
One with wisdom, one with pride.\n\
Sumi guides with steady grace,\n\
Fuchi brings joy in every space.\n\
Through every storm, you both remain,\n\
My shelter in laughter, balm in pain.\n\
Different notes in the same sweet song,\n\
With you two, I feel strong.\n\
Sisters by blood, but more by soul,\n\
Together you make my spirit whole.",
    },
    Poem {
        author: "Chhotu",
        text: "We’ve built a world of silly talks,\n\
Of quiet tears and midnight walks.\n\
Sumi, you lead with thoughtful might,\n\
Fuchi, you dance in colors bright.\n\
You're my chaos, you're my calm,\n\
My push ahead, my healing balm.\n\
The world may turn a thousand ways,\n\
But your love steadies all my days.\n\
A trio bound, no end, no start,\n\
Two pieces stitched into my heart.",
    },
    Poem {
        author: "Ramu",
        text: "Like threads of Rakhi wrapped in gold,\n\
You both are stories I've been told.\n\
Of care that shields, of fights that teach,\n\
Of dreams that always felt in reach.\n\
Sumi, you’re my northern light,\n\
Fuchi, you’re my morning bright.\n\
Together you make life feel new,\n\
Old scars heal when I'm with you.\n\
A brother’s heart, proud and true,\n\
Beats stronger just because of you.",
    },
    Poem {
        author: "Sofu",
        text: "In every chapter of my days,\n\
You’ve been my strength in countless ways.\n\
Sumi, with calm and wisdom deep,\n\
Fuchi, with laughter you always keep.\n\
You held my hands when I felt lost,\n\
No matter the storm, you bore the cost.\n\
We grew in love, in fights, in fun,\n\
Three souls orbiting the same sun.\n\
No gift on Earth, no grander feat,\n\
Than calling you both my heartbeat",
    },
    Poem {
        author: "Jhamku",
        text: "Between your words, I find my peace,\n\
A kind of magic that doesn't cease.\n\
Sumi speaks truth like a guiding flame,\n\
Fuchi sparks joy like a wild game.\n\
In your eyes, I see my home,\n\
A place where I can safely roam.\n\
Through silly fights and honest care,\n\
I’ve found my heaven, always there.\n\
You two are mirrors, stars, and skies,\n\
My sisters, my truth, my sweetest ties.",
    },
    Poem {
        author: "Piku",
        text: "My Sumi Didi is very kind,\n\
She helps me when I fall behind.\n\
Fuchi Didi plays with me,\n\
She laughs so much and climbs the tree!\n\
They both give me lots of love,\n\
Like angels sent from up above.\n\
We eat, we talk, we sing and play,\n\
They make me smile every day.\n\
I love my Didis big and small,\n\
They’re the best sisters of them all!",
    },
];

/// Captions of the memory album, in display order
pub const ALBUM_CAPTIONS: &[(&str, &str)] = &[
    ("🌸", "Our Garden Adventures"),
    ("🍬", "Festival Sweet Moments"),
    ("🎲", "Game Night Fun"),
    ("📚", "Study Sessions"),
];

/// Which envelopes have been opened and which poem is showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surprise {
    letter_open: bool,
    album_open: bool,
    poem: usize,
}

impl Surprise {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_letter_open(&self) -> bool {
        self.letter_open
    }

    pub fn is_album_open(&self) -> bool {
        self.album_open
    }

    /// Open the poems at the first one
    pub fn open_letter(&mut self, achievements: &mut dyn AchievementSink) {
        self.letter_open = true;
        self.poem = 0;
        achievements.unlock(Achievement::LetterReader);
        achievements.unlock(Achievement::CelebrationMaster);
    }

    pub fn open_album(&mut self, achievements: &mut dyn AchievementSink) {
        self.album_open = true;
        achievements.unlock(Achievement::MemoryExplorer);
        achievements.unlock(Achievement::CelebrationMaster);
    }

    pub fn poem(&self) -> &'static Poem {
        &POEMS[self.poem]
    }

    /// 1-based position for the pager
    pub fn poem_number(&self) -> usize {
        self.poem + 1
    }

    pub fn next_poem(&mut self) {
        self.poem = (self.poem + 1) % POEMS.len();
    }

    pub fn prev_poem(&mut self) {
        self.poem = (self.poem + POEMS.len() - 1) % POEMS.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementTracker;
    use crate::storage::{MemoryStore, Persistence};

    #[test]
    fn test_poem_pager_wraps() {
        let mut surprise = Surprise::new();
        surprise.prev_poem();
        assert_eq!(surprise.poem().author, "Piku");
        assert_eq!(surprise.poem_number(), POEMS.len());
        surprise.next_poem();
        assert_eq!(surprise.poem().author, "Baru");
    }

    #[test]
    fn test_opening_unlocks() {
        let mut achievements = AchievementTracker::mount(Persistence::new(MemoryStore::new()));
        let mut surprise = Surprise::new();

        surprise.next_poem();
        surprise.open_letter(&mut achievements);
        assert!(surprise.is_letter_open());
        assert_eq!(surprise.poem_number(), 1);
        assert!(achievements.contains("Letter Reader"));
        assert!(!achievements.contains("Memory Explorer"));

        surprise.open_album(&mut achievements);
        assert!(achievements.contains("Memory Explorer"));
        assert!(achievements.contains("Celebration Master"));
    }
}
