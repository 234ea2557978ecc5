//! Ending display content: the title, reflection, and closing line for
//! each of the sixteen narrative outcomes.

use scoring_engine::EndingId;

/// Display content for one narrative ending.
///
/// Pure text; visual treatment of the ending screen belongs to the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndingProfile {
    pub title: &'static str,
    pub reflection: &'static str,
    pub closing: &'static str,
}

impl EndingProfile {
    /// The display profile for an ending.
    pub fn of(id: EndingId) -> EndingProfile {
        match id {
            EndingId::E1 => EndingProfile {
                title: "The Brave Heart",
                reflection: "You choose honesty, even when your voice shakes. \
                             You walk toward connection instead of away from fear.",
                closing: "Your courage makes love possible.",
            },
            EndingId::E2 => EndingProfile {
                title: "The Quiet Protector",
                reflection: "You hold your feelings gently, guarding them until the \
                             world feels safe. Your silence is not emptiness; it's care.",
                closing: "You love softly, even when unseen.",
            },
            EndingId::E3 => EndingProfile {
                title: "The Heart That Waits",
                reflection: "You long for closeness, but you move carefully. You're \
                             patient with your own timing, even when the world rushes.",
                closing: "Your pace is still a kind of love.",
            },
            EndingId::E4 => EndingProfile {
                title: "The Hopeful Believer",
                reflection: "You see the light in others even when it dims. You choose \
                             to trust in the possibility of what could be.",
                closing: "Your faith is a beacon.",
            },
            EndingId::E5 => EndingProfile {
                title: "The Lonely Companion",
                reflection: "You stay, even when you feel alone. Your loyalty is deep, \
                             but your heart deserves to be held too.",
                closing: "You are worthy of being chosen back.",
            },
            EndingId::E6 => EndingProfile {
                title: "The Open Heart",
                reflection: "You're ready to love again. You've learned from your past \
                             without letting it close you.",
                closing: "Your openness is your strength.",
            },
            EndingId::E7 => EndingProfile {
                title: "The Guarded Soul",
                reflection: "You protect yourself because you've been hurt. Your caution \
                             is not weakness; it's wisdom.",
                closing: "You deserve a love that feels safe.",
            },
            EndingId::E8 => EndingProfile {
                title: "The Quiet Dreamer",
                reflection: "You imagine love more than you chase it. Your heart is \
                             tender, hopeful, and still healing.",
                closing: "Your dreams are seeds; they will grow.",
            },
            EndingId::E9 => EndingProfile {
                title: "The Growing Soul",
                reflection: "You act with purpose and care for others. You're learning \
                             that growth means both reaching outward and tending to \
                             your own heart.",
                closing: "Your journey is your strength.",
            },
            EndingId::E10 => EndingProfile {
                title: "The Mirror Seeker",
                reflection: "You look inward with courage, facing truths others avoid. \
                             Your honesty with yourself is a rare gift.",
                closing: "Knowing yourself is the beginning of wisdom.",
            },
            EndingId::E11 => EndingProfile {
                title: "The Forgiver",
                reflection: "You hold space for others' imperfections, including your \
                             own. Your compassion is a healing force.",
                closing: "Grace is your superpower.",
            },
            EndingId::E12 => EndingProfile {
                title: "The Passionate Wanderer",
                reflection: "You move forward boldly, guarding your heart while seeking \
                             adventure. You don't need to reveal everything to live fully.",
                closing: "Your freedom is your love language.",
            },
            EndingId::E13 => EndingProfile {
                title: "The Peaceful One",
                reflection: "You've found a quiet confidence in who you are. Your \
                             self-worth doesn't depend on someone else's validation.",
                closing: "Your calm is a kind of courage.",
            },
            EndingId::E14 => EndingProfile {
                title: "The Shadow Holder",
                reflection: "You carry weight others don't see. Your struggles are real, \
                             and they matter. You don't have to hold it all alone.",
                closing: "Even shadows need light.",
            },
            EndingId::E15 => EndingProfile {
                title: "The Unnamed Heart",
                reflection: "You exist in perfect balance, neither here nor there. \
                             You're discovering that not every question needs an answer \
                             right now.",
                closing: "Mystery is a valid state of being.",
            },
            EndingId::E16 => EndingProfile {
                title: "The Heart Between Worlds",
                reflection: "You contain multitudes, fierce and gentle, hopeful and \
                             guarded. You defy simple categories, and that's your magic.",
                closing: "Contradiction is not confusion.",
            },
        }
    }
}
