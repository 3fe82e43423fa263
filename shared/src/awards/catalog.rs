//! The built-in award catalog
//!
//! Definition order is significant: evaluation walks each family in this
//! order and reports newly unlocked ids in the same order.

use once_cell::sync::Lazy;

use super::{AwardDefinition, AwardKind, EntryRule, Metric};

/// Awards tested against a single logged day
pub const ENTRY_AWARDS: &[AwardDefinition] = &[
    // Getting Started
    AwardDefinition::entry(
        "first_entry",
        "First Steps",
        "Log your first walking entry",
        "👶",
        EntryRule::MinSteps { steps: 1 },
    ),
    AwardDefinition::entry(
        "steps_500",
        "Tiny Steps",
        "Walk 500 steps in a single day",
        "👣",
        EntryRule::MinSteps { steps: 500 },
    ),
    AwardDefinition::entry(
        "steps_1k",
        "1,000 Steps",
        "Walk 1,000 steps in a single day",
        "👣",
        EntryRule::MinSteps { steps: 1000 },
    ),
    AwardDefinition::entry(
        "steps_2k",
        "Double Grand",
        "Walk 2,000 steps in a single day",
        "🐾",
        EntryRule::MinSteps { steps: 2000 },
    ),
    AwardDefinition::entry(
        "steps_2500",
        "2,500 Steps",
        "Walk 2,500 steps in a single day",
        "🐾",
        EntryRule::MinSteps { steps: 2500 },
    ),
    AwardDefinition::entry(
        "steps_5k",
        "5,000 Steps",
        "Walk 5,000 steps in a single day",
        "🚶",
        EntryRule::MinSteps { steps: 5000 },
    ),
    AwardDefinition::entry(
        "steps_7500",
        "7,500 Steps",
        "Walk 7,500 steps in a single day",
        "🚶‍♂️",
        EntryRule::MinSteps { steps: 7500 },
    ),
    AwardDefinition::entry(
        "steps_10k",
        "10,000 Steps",
        "Walk 10,000 steps in a single day",
        "🏃",
        EntryRule::MinSteps { steps: 10_000 },
    ),
    AwardDefinition::entry(
        "steps_12500",
        "12,500 Steps",
        "Walk 12,500 steps in a single day",
        "🏃‍♂️",
        EntryRule::MinSteps { steps: 12_500 },
    ),
    AwardDefinition::entry(
        "steps_15k",
        "15,000 Steps",
        "Walk 15,000 steps in a single day",
        "⚡",
        EntryRule::MinSteps { steps: 15_000 },
    ),
    AwardDefinition::entry(
        "steps_20k",
        "20,000 Steps",
        "Walk 20,000 steps in a single day",
        "🔥",
        EntryRule::MinSteps { steps: 20_000 },
    ),
    AwardDefinition::entry(
        "steps_25k",
        "25,000 Steps",
        "Walk 25,000 steps in a single day",
        "💪",
        EntryRule::MinSteps { steps: 25_000 },
    ),
    AwardDefinition::entry(
        "steps_30k",
        "30,000 Steps",
        "Walk 30,000 steps in a single day",
        "🦸",
        EntryRule::MinSteps { steps: 30_000 },
    ),
    AwardDefinition::entry(
        "steps_50k",
        "Ultra Walker",
        "Walk 50,000 steps in a single day",
        "🌟",
        EntryRule::MinSteps { steps: 50_000 },
    ),
    // Distance milestones
    AwardDefinition::entry(
        "distance_500m",
        "Half-K",
        "Walk 0.5 kilometers in a single day",
        "📍",
        EntryRule::MinDistanceKm { km: 0.5 },
    ),
    AwardDefinition::entry(
        "distance_1km",
        "1 Kilometer",
        "Walk 1 kilometer in a single day",
        "📌",
        EntryRule::MinDistanceKm { km: 1.0 },
    ),
    AwardDefinition::entry(
        "distance_2km",
        "2 Kilometers",
        "Walk 2 kilometers in a single day",
        "🚩",
        EntryRule::MinDistanceKm { km: 2.0 },
    ),
    AwardDefinition::entry(
        "distance_3km",
        "3 Kilometers",
        "Walk 3 kilometers in a single day",
        "🏁",
        EntryRule::MinDistanceKm { km: 3.0 },
    ),
    AwardDefinition::entry(
        "distance_5km",
        "5 Kilometers",
        "Walk 5 kilometers in a single day",
        "📍",
        EntryRule::MinDistanceKm { km: 5.0 },
    ),
    AwardDefinition::entry(
        "distance_10km",
        "10 Kilometers",
        "Walk 10 kilometers in a single day",
        "🗺️",
        EntryRule::MinDistanceKm { km: 10.0 },
    ),
    AwardDefinition::entry(
        "distance_15km",
        "15 Kilometers",
        "Walk 15 kilometers in a single day",
        "🧭",
        EntryRule::MinDistanceKm { km: 15.0 },
    ),
    AwardDefinition::entry(
        "distance_half_marathon",
        "Half Marathon",
        "Walk 21.1 kilometers in a single day",
        "🏅",
        EntryRule::MinDistanceKm { km: 21.1 },
    ),
    AwardDefinition::entry(
        "distance_marathon",
        "Marathon",
        "Walk 42.2 kilometers in a single day",
        "🎖️",
        EntryRule::MinDistanceKm { km: 42.2 },
    ),
    // Time milestones
    AwardDefinition::entry(
        "time_5min",
        "Quick Break",
        "Walk for 5 minutes in a single day",
        "⏱️",
        EntryRule::MinMinutes { minutes: 5 },
    ),
    AwardDefinition::entry(
        "time_10min",
        "10 Minute Walk",
        "Walk for 10 minutes in a single day",
        "⏳",
        EntryRule::MinMinutes { minutes: 10 },
    ),
    AwardDefinition::entry(
        "time_15min",
        "15 Minute Walk",
        "Walk for 15 minutes in a single day",
        "⌛",
        EntryRule::MinMinutes { minutes: 15 },
    ),
    AwardDefinition::entry(
        "time_30min",
        "30 Minute Walk",
        "Walk for 30 minutes in a single day",
        "⏱️",
        EntryRule::MinMinutes { minutes: 30 },
    ),
    AwardDefinition::entry(
        "time_45min",
        "45 Minute Walk",
        "Walk for 45 minutes in a single day",
        "⏲️",
        EntryRule::MinMinutes { minutes: 45 },
    ),
    AwardDefinition::entry(
        "time_1hr",
        "1 Hour Walk",
        "Walk for 60 minutes in a single day",
        "🕐",
        EntryRule::MinMinutes { minutes: 60 },
    ),
    AwardDefinition::entry(
        "time_90min",
        "90 Minute Walk",
        "Walk for 90 minutes in a single day",
        "🕜",
        EntryRule::MinMinutes { minutes: 90 },
    ),
    AwardDefinition::entry(
        "time_2hr",
        "2 Hour Walk",
        "Walk for 120 minutes in a single day",
        "⏰",
        EntryRule::MinMinutes { minutes: 120 },
    ),
    AwardDefinition::entry(
        "time_3hr",
        "3 Hour Walk",
        "Walk for 180 minutes in a single day",
        "🕰️",
        EntryRule::MinMinutes { minutes: 180 },
    ),
    // Calorie milestones
    AwardDefinition::entry(
        "calories_25",
        "Spark",
        "Burn 25 calories in a single day",
        "✨",
        EntryRule::MinCalories { calories: 25 },
    ),
    AwardDefinition::entry(
        "calories_50",
        "50 Calorie Burn",
        "Burn 50 calories in a single day",
        "✨",
        EntryRule::MinCalories { calories: 50 },
    ),
    AwardDefinition::entry(
        "calories_100",
        "100 Calorie Burn",
        "Burn 100 calories in a single day",
        "🔋",
        EntryRule::MinCalories { calories: 100 },
    ),
    AwardDefinition::entry(
        "calories_150",
        "150 Calorie Burn",
        "Burn 150 calories in a single day",
        "🔌",
        EntryRule::MinCalories { calories: 150 },
    ),
    AwardDefinition::entry(
        "calories_200",
        "200 Calorie Burn",
        "Burn 200 calories in a single day",
        "💡",
        EntryRule::MinCalories { calories: 200 },
    ),
    AwardDefinition::entry(
        "calories_300",
        "300 Calorie Burn",
        "Burn 300 calories in a single day",
        "⚡",
        EntryRule::MinCalories { calories: 300 },
    ),
    AwardDefinition::entry(
        "calories_500",
        "500 Calorie Burn",
        "Burn 500 calories in a single day",
        "🔥",
        EntryRule::MinCalories { calories: 500 },
    ),
    AwardDefinition::entry(
        "calories_750",
        "750 Calorie Burn",
        "Burn 750 calories in a single day",
        "🌋",
        EntryRule::MinCalories { calories: 750 },
    ),
    AwardDefinition::entry(
        "calories_1000",
        "1000 Calorie Burn",
        "Burn 1000 calories in a single day",
        "💥",
        EntryRule::MinCalories { calories: 1000 },
    ),
    // Step variety awards
    AwardDefinition::entry(
        "steps_3k",
        "3,000 Steps",
        "Walk 3,000 steps in a single day",
        "🌱",
        EntryRule::MinSteps { steps: 3000 },
    ),
    AwardDefinition::entry(
        "steps_4k",
        "4,000 Steps",
        "Walk 4,000 steps in a single day",
        "🌿",
        EntryRule::MinSteps { steps: 4000 },
    ),
    AwardDefinition::entry(
        "steps_6k",
        "6,000 Steps",
        "Walk 6,000 steps in a single day",
        "🌲",
        EntryRule::MinSteps { steps: 6000 },
    ),
    AwardDefinition::entry(
        "steps_8k",
        "8,000 Steps",
        "Walk 8,000 steps in a single day",
        "🌳",
        EntryRule::MinSteps { steps: 8000 },
    ),
    AwardDefinition::entry(
        "steps_40k",
        "40,000 Steps",
        "Walk 40,000 steps in a single day",
        "🦅",
        EntryRule::MinSteps { steps: 40_000 },
    ),
    // More distance milestones
    AwardDefinition::entry(
        "distance_4km",
        "4 Kilometers",
        "Walk 4 kilometers in a single day",
        "🛤️",
        EntryRule::MinDistanceKm { km: 4.0 },
    ),
    AwardDefinition::entry(
        "distance_6km",
        "6 Kilometers",
        "Walk 6 kilometers in a single day",
        "🛣️",
        EntryRule::MinDistanceKm { km: 6.0 },
    ),
    AwardDefinition::entry(
        "distance_7km",
        "7 Kilometers",
        "Walk 7 kilometers in a single day",
        "🌄",
        EntryRule::MinDistanceKm { km: 7.0 },
    ),
    AwardDefinition::entry(
        "distance_8km",
        "8 Kilometers",
        "Walk 8 kilometers in a single day",
        "⛰️",
        EntryRule::MinDistanceKm { km: 8.0 },
    ),
    AwardDefinition::entry(
        "distance_20km",
        "20 Kilometers",
        "Walk 20 kilometers in a single day",
        "🏔️",
        EntryRule::MinDistanceKm { km: 20.0 },
    ),
    AwardDefinition::entry(
        "distance_25km",
        "25 Kilometers",
        "Walk 25 kilometers in a single day",
        "🗻",
        EntryRule::MinDistanceKm { km: 25.0 },
    ),
    AwardDefinition::entry(
        "distance_30km",
        "30 Kilometers",
        "Walk 30 kilometers in a single day",
        "🌍",
        EntryRule::MinDistanceKm { km: 30.0 },
    ),
    // More time milestones
    AwardDefinition::entry(
        "time_20min",
        "20 Minute Walk",
        "Walk for 20 minutes in a single day",
        "🎯",
        EntryRule::MinMinutes { minutes: 20 },
    ),
    AwardDefinition::entry(
        "time_4hr",
        "4 Hour Walk",
        "Walk for 4 hours in a single day",
        "🌅",
        EntryRule::MinMinutes { minutes: 240 },
    ),
    AwardDefinition::entry(
        "time_5hr",
        "5 Hour Walk",
        "Walk for 5 hours in a single day",
        "🌄",
        EntryRule::MinMinutes { minutes: 300 },
    ),
    AwardDefinition::entry(
        "time_6hr",
        "6 Hour Walk",
        "Walk for 6 hours in a single day",
        "🌠",
        EntryRule::MinMinutes { minutes: 360 },
    ),
    AwardDefinition::entry(
        "time_8hr",
        "8 Hour Walk",
        "Walk for 8 hours in a single day - a full workday!",
        "🌌",
        EntryRule::MinMinutes { minutes: 480 },
    ),
    // Fun themed awards
    AwardDefinition::entry(
        "perfect_10k",
        "Perfect 10K",
        "Walk exactly 10,000 steps in a day (within 100)",
        "🎯",
        EntryRule::StepsBetween { min: 9950, max: 10_050 },
    ),
    AwardDefinition::entry(
        "nice_steps",
        "Nice!",
        "Walk exactly 6,969 steps in a day",
        "😏",
        EntryRule::StepsBetween { min: 6969, max: 6999 },
    ),
    AwardDefinition::entry(
        "round_number",
        "Round Number",
        "Walk exactly 5,000 or 10,000 or 15,000 or 20,000 steps",
        "🔵",
        EntryRule::RoundedSteps { values: &[5000, 10_000, 15_000, 20_000] },
    ),
    AwardDefinition::entry(
        "lucky_7",
        "Lucky 7",
        "Walk at least 7,777 steps in a day",
        "🍀",
        EntryRule::MinSteps { steps: 7777 },
    ),
    AwardDefinition::entry(
        "short_walk",
        "Quick Stroll",
        "Log any walk under 5 minutes",
        "🚶‍♀️",
        EntryRule::MinutesUnder { minutes: 5 },
    ),
    // More fun themed awards
    AwardDefinition::entry(
        "double_goal",
        "Double Trouble",
        "Walk double your daily goal (20,000+ steps)",
        "✌️",
        EntryRule::MinSteps { steps: 20_000 },
    ),
    AwardDefinition::entry(
        "steady_pace",
        "Steady Pace",
        "Walk between 80-120 steps per minute",
        "🎵",
        EntryRule::CadenceBetween { min: 80.0, max: 120.0 },
    ),
    AwardDefinition::entry(
        "morning_person",
        "Morning Walker",
        "Log 5,000+ steps in a single entry",
        "🌅",
        EntryRule::MinSteps { steps: 5000 },
    ),
    AwardDefinition::entry(
        "consistent_steps",
        "Consistent",
        "Log exactly between 9,000-11,000 steps",
        "📊",
        EntryRule::StepsBetween { min: 9000, max: 11_000 },
    ),
    AwardDefinition::entry(
        "balanced_walk",
        "Balanced",
        "Walk where distance (km) roughly matches time (min/10)",
        "⚖️",
        EntryRule::BalancedPace,
    ),
    // Milestone variety
    AwardDefinition::entry(
        "steps_9k",
        "9,000 Steps",
        "Walk 9,000 steps in a single day",
        "9️⃣",
        EntryRule::MinSteps { steps: 9000 },
    ),
    AwardDefinition::entry(
        "steps_11k",
        "11,000 Steps",
        "Walk 11,000 steps in a single day",
        "🎰",
        EntryRule::MinSteps { steps: 11_000 },
    ),
    AwardDefinition::entry(
        "steps_13k",
        "13,000 Steps",
        "Walk 13,000 steps in a single day",
        "🔮",
        EntryRule::MinSteps { steps: 13_000 },
    ),
    AwardDefinition::entry(
        "steps_17500",
        "17,500 Steps",
        "Walk 17,500 steps in a single day",
        "🎯",
        EntryRule::MinSteps { steps: 17_500 },
    ),
    AwardDefinition::entry(
        "steps_22500",
        "22,500 Steps",
        "Walk 22,500 steps in a single day",
        "🎳",
        EntryRule::MinSteps { steps: 22_500 },
    ),
    // Calorie variety
    AwardDefinition::entry(
        "calories_175",
        "175 Calorie Burn",
        "Burn 175 calories in a single day",
        "💛",
        EntryRule::MinCalories { calories: 175 },
    ),
    AwardDefinition::entry(
        "calories_225",
        "225 Calorie Burn",
        "Burn 225 calories in a single day",
        "🧡",
        EntryRule::MinCalories { calories: 225 },
    ),
    AwardDefinition::entry(
        "calories_350",
        "350 Calorie Burn",
        "Burn 350 calories in a single day",
        "❤️",
        EntryRule::MinCalories { calories: 350 },
    ),
    AwardDefinition::entry(
        "calories_400",
        "400 Calorie Burn",
        "Burn 400 calories in a single day",
        "💜",
        EntryRule::MinCalories { calories: 400 },
    ),
    AwardDefinition::entry(
        "calories_600",
        "600 Calorie Burn",
        "Burn 600 calories in a single day",
        "💙",
        EntryRule::MinCalories { calories: 600 },
    ),
    // Time variety
    AwardDefinition::entry(
        "time_25min",
        "25 Minute Walk",
        "Walk for 25 minutes in a single day",
        "⌚",
        EntryRule::MinMinutes { minutes: 25 },
    ),
    AwardDefinition::entry(
        "time_35min",
        "35 Minute Walk",
        "Walk for 35 minutes in a single day",
        "🕐",
        EntryRule::MinMinutes { minutes: 35 },
    ),
    AwardDefinition::entry(
        "time_50min",
        "50 Minute Walk",
        "Walk for 50 minutes in a single day",
        "🕑",
        EntryRule::MinMinutes { minutes: 50 },
    ),
    AwardDefinition::entry(
        "time_75min",
        "75 Minute Walk",
        "Walk for 75 minutes in a single day",
        "🕒",
        EntryRule::MinMinutes { minutes: 75 },
    ),
    AwardDefinition::entry(
        "time_100min",
        "100 Minute Walk",
        "Walk for 100 minutes in a single day",
        "💯",
        EntryRule::MinMinutes { minutes: 100 },
    ),
    // Distance variety
    AwardDefinition::entry(
        "distance_9km",
        "9 Kilometers",
        "Walk 9 kilometers in a single day",
        "🛤️",
        EntryRule::MinDistanceKm { km: 9.0 },
    ),
    AwardDefinition::entry(
        "distance_11km",
        "11 Kilometers",
        "Walk 11 kilometers in a single day",
        "🛣️",
        EntryRule::MinDistanceKm { km: 11.0 },
    ),
    AwardDefinition::entry(
        "distance_13km",
        "13 Kilometers",
        "Walk 13 kilometers in a single day",
        "🎪",
        EntryRule::MinDistanceKm { km: 13.0 },
    ),
    AwardDefinition::entry(
        "distance_14km",
        "14 Kilometers",
        "Walk 14 kilometers in a single day",
        "🎡",
        EntryRule::MinDistanceKm { km: 14.0 },
    ),
    AwardDefinition::entry(
        "distance_16km",
        "16 Kilometers",
        "Walk 16 kilometers in a single day",
        "🎢",
        EntryRule::MinDistanceKm { km: 16.0 },
    ),
    AwardDefinition::entry(
        "distance_17km",
        "17 Kilometers",
        "Walk 17 kilometers in a single day",
        "🎠",
        EntryRule::MinDistanceKm { km: 17.0 },
    ),
    AwardDefinition::entry(
        "distance_18km",
        "18 Kilometers",
        "Walk 18 kilometers in a single day",
        "🏖️",
        EntryRule::MinDistanceKm { km: 18.0 },
    ),
    // Fun & Lifestyle Awards
    AwardDefinition::entry(
        "weekend_warrior",
        "Weekend Warrior",
        "Log 10,000+ steps on a Saturday or Sunday",
        "🎉",
        EntryRule::WeekendSteps { steps: 10_000 },
    ),
    AwardDefinition::entry(
        "palindrome_steps",
        "Palindrome",
        "Log a palindromic step count > 1000 (e.g. 1221, 5665)",
        "🔁",
        EntryRule::PalindromeSteps { above: 1000 },
    ),
    AwardDefinition::entry(
        "triplet_steps",
        "Triple Threat",
        "Log a step count with 3 repeated digits at the end (e.g. 5777)",
        "🎰",
        EntryRule::RepeatedEnding { above: 1000 },
    ),
    AwardDefinition::entry(
        "step_pi",
        "Pi Walker",
        "Walk 3,141 steps (approx pi * 1000)",
        "🥧",
        EntryRule::StepsBetween { min: 3140, max: 3145 },
    ),
    AwardDefinition::entry(
        "binary_walker",
        "Binary Beast",
        "Steps composed only of 1s and 0s (e.g. 10110)",
        "🤖",
        EntryRule::BinarySteps { above: 100 },
    ),
    AwardDefinition::entry(
        "the_answer",
        "The Answer",
        "Walk exactly 42 or 4,200 or 42,000 steps",
        "🌌",
        EntryRule::ExactSteps { values: &[42, 4200, 42_000] },
    ),
    AwardDefinition::entry(
        "stairs_equivalent",
        "Sky High",
        "Distance equivalent to climbing the Burj Khalifa (~830m)",
        "🏙️",
        EntryRule::MinDistanceKm { km: 0.83 },
    ),
    AwardDefinition::entry(
        "lunch_break",
        "Lunch Break",
        "A solid 15-30 minute walk",
        "🥪",
        EntryRule::MinutesBetween { min: 15, max: 30 },
    ),
    AwardDefinition::entry(
        "movie_length",
        "Feature Film",
        "Walk for the duration of a movie (90+ mins)",
        "🎬",
        EntryRule::MinMinutes { minutes: 90 },
    ),
];

/// Awards for lifetime totals
#[rustfmt::skip]
pub const CUMULATIVE_AWARDS: &[AwardDefinition] = &[
    // Cumulative Steps
    AwardDefinition::cumulative("total_steps_2500", "Warm Up", "Reach 2,500 total steps", "👟", Metric::Steps, 2500.0),
    AwardDefinition::cumulative("total_steps_5k", "Getting Serious", "Reach 5,000 total steps", "👞", Metric::Steps, 5000.0),
    AwardDefinition::cumulative("total_steps_7500", "7.5K Steps", "Reach 7,500 total steps", "👟", Metric::Steps, 7500.0),
    AwardDefinition::cumulative("total_steps_10k", "The First 10K", "Reach 10,000 total steps", "🏆", Metric::Steps, 10_000.0),
    AwardDefinition::cumulative("total_steps_15k", "15K Steps", "Reach 15,000 total steps", "🚶", Metric::Steps, 15_000.0),
    AwardDefinition::cumulative("total_steps_20k", "20K Steps", "Reach 20,000 total steps", "🚶", Metric::Steps, 20_000.0),
    AwardDefinition::cumulative("total_steps_25k", "25K Steps", "Reach 25,000 total steps", "🚶", Metric::Steps, 25_000.0),
    AwardDefinition::cumulative("total_steps_30k", "30K Steps", "Reach 30,000 total steps", "🚶", Metric::Steps, 30_000.0),
    AwardDefinition::cumulative("total_steps_35k", "35K Steps", "Reach 35,000 total steps", "🏃", Metric::Steps, 35_000.0),
    AwardDefinition::cumulative("total_steps_40k", "40K Steps", "Reach 40,000 total steps", "🏃", Metric::Steps, 40_000.0),
    AwardDefinition::cumulative("total_steps_45k", "45K Steps", "Reach 45,000 total steps", "🏃", Metric::Steps, 45_000.0),
    AwardDefinition::cumulative("total_steps_50k", "Step Jubilee", "Reach 50,000 total steps", "🥈", Metric::Steps, 50_000.0),
    AwardDefinition::cumulative("total_steps_60k", "60K Steps", "Reach 60,000 total steps", "🤟", Metric::Steps, 60_000.0),
    AwardDefinition::cumulative("total_steps_65k", "65K Steps", "Reach 65,000 total steps", "🤟", Metric::Steps, 65_000.0),
    AwardDefinition::cumulative("total_steps_70k", "70K Steps", "Reach 70,000 total steps", "🤟", Metric::Steps, 70_000.0),
    AwardDefinition::cumulative("total_steps_75k", "75K Steps", "Reach 75,000 total steps", "👢", Metric::Steps, 75_000.0),
    AwardDefinition::cumulative("total_steps_80k", "80K Steps", "Reach 80,000 total steps", "👢", Metric::Steps, 80_000.0),
    AwardDefinition::cumulative("total_steps_90k", "90K Steps", "Reach 90,000 total steps", "👢", Metric::Steps, 90_000.0),
    AwardDefinition::cumulative("total_steps_95k", "95K Steps", "Reach 95,000 total steps", "👢", Metric::Steps, 95_000.0),
    AwardDefinition::cumulative("total_steps_100k", "Century Walker", "Reach 100,000 total steps", "🥇", Metric::Steps, 100_000.0),
    AwardDefinition::cumulative("total_steps_125k", "125K Steps", "Reach 125,000 total steps", "🥇", Metric::Steps, 125_000.0),
    AwardDefinition::cumulative("total_steps_150k", "150K Steps", "Reach 150,000 total steps", "🥇", Metric::Steps, 150_000.0),
    AwardDefinition::cumulative("total_steps_175k", "175K Steps", "Reach 175,000 total steps", "🥇", Metric::Steps, 175_000.0),
    AwardDefinition::cumulative("total_steps_200k", "200K Steps", "Reach 200,000 total steps", "🥇", Metric::Steps, 200_000.0),
    AwardDefinition::cumulative("total_steps_225k", "225K Steps", "Reach 225,000 total steps", "🥇", Metric::Steps, 225_000.0),
    AwardDefinition::cumulative("total_steps_250k", "Quarter Million", "Reach 250,000 total steps", "💎", Metric::Steps, 250_000.0),
    AwardDefinition::cumulative("total_steps_300k", "300K Steps", "Reach 300,000 total steps", "💎", Metric::Steps, 300_000.0),
    AwardDefinition::cumulative("total_steps_400k", "400K Steps", "Reach 400,000 total steps", "💎", Metric::Steps, 400_000.0),
    AwardDefinition::cumulative("total_steps_500k", "Half Million Milestone", "Reach 500,000 total steps", "👑", Metric::Steps, 500_000.0),
    AwardDefinition::cumulative("total_steps_600k", "600K Steps", "Reach 600,000 total steps", "👑", Metric::Steps, 600_000.0),
    AwardDefinition::cumulative("total_steps_700k", "700K Steps", "Reach 700,000 total steps", "👑", Metric::Steps, 700_000.0),
    AwardDefinition::cumulative("total_steps_800k", "800K Steps", "Reach 800,000 total steps", "👑", Metric::Steps, 800_000.0),
    AwardDefinition::cumulative("total_steps_900k", "900K Steps", "Reach 900,000 total steps", "👑", Metric::Steps, 900_000.0),
    AwardDefinition::cumulative("total_steps_1m", "Step Millionaire", "Reach 1,000,000 total steps!", "🌌", Metric::Steps, 1_000_000.0),
    // Cumulative Distance
    AwardDefinition::cumulative("total_distance_1km", "First Kilometer", "Reach 1 kilometer total walking distance", "📏", Metric::Distance, 1.0),
    AwardDefinition::cumulative("total_distance_5km", "5K Cumulative", "Reach 5 kilometers total walking distance", "📐", Metric::Distance, 5.0),
    AwardDefinition::cumulative("total_distance_7_5km", "7.5KM Stroll", "Reach 7.5 kilometers total walking distance", "📏", Metric::Distance, 7.5),
    AwardDefinition::cumulative("total_distance_10km", "10K Club", "Reach 10 kilometers total walking distance", "📍", Metric::Distance, 10.0),
    AwardDefinition::cumulative("total_distance_15km", "15KM Trek", "Reach 15 kilometers total walking distance", "🧭", Metric::Distance, 15.0),
    AwardDefinition::cumulative("total_distance_20km", "20K Trek", "Reach 20 kilometers total walking distance", "🧭", Metric::Distance, 20.0),
    AwardDefinition::cumulative("total_distance_25km", "25KM Trek", "Reach 25 kilometers total walking distance", "🧭", Metric::Distance, 25.0),
    AwardDefinition::cumulative("total_distance_30km", "30KM Trek", "Reach 30 kilometers total walking distance", "🧭", Metric::Distance, 30.0),
    AwardDefinition::cumulative("total_distance_35km", "35K Voyage", "Reach 35 kilometers total walking distance", "🏔️", Metric::Distance, 35.0),
    AwardDefinition::cumulative("total_distance_40km", "40KM Voyage", "Reach 40 kilometers total walking distance", "🏔️", Metric::Distance, 40.0),
    AwardDefinition::cumulative("total_distance_45km", "45KM Voyage", "Reach 45 kilometers total walking distance", "🏔️", Metric::Distance, 45.0),
    AwardDefinition::cumulative("total_distance_50km", "50K Trekker", "Reach 50 kilometers total walking distance", "🗺️", Metric::Distance, 50.0),
    AwardDefinition::cumulative("total_distance_55km", "55KM Trekker", "Reach 55 kilometers total walking distance", "🗺️", Metric::Distance, 55.0),
    AwardDefinition::cumulative("total_distance_60km", "60KM Trek", "Reach 60 kilometers total walking distance", "🚧", Metric::Distance, 60.0),
    AwardDefinition::cumulative("total_distance_65km", "65KM Trek", "Reach 65 kilometers total walking distance", "🚧", Metric::Distance, 65.0),
    AwardDefinition::cumulative("total_distance_70km", "70KM Trek", "Reach 70 kilometers total walking distance", "🚧", Metric::Distance, 70.0),
    AwardDefinition::cumulative("total_distance_75km", "75KM Journey", "Reach 75 kilometers total walking distance", "⚓", Metric::Distance, 75.0),
    AwardDefinition::cumulative("total_distance_80km", "80KM Journey", "Reach 80 kilometers total walking distance", "⚓", Metric::Distance, 80.0),
    AwardDefinition::cumulative("total_distance_90km", "90KM Journey", "Reach 90 kilometers total walking distance", "⚓", Metric::Distance, 90.0),
    AwardDefinition::cumulative("total_distance_95km", "95KM Journey", "Reach 95 kilometers total walking distance", "⚓", Metric::Distance, 95.0),
    AwardDefinition::cumulative("total_distance_100km", "The Hundredth KM", "Reach 100 kilometers total walking distance", "🌐", Metric::Distance, 100.0),
    AwardDefinition::cumulative("total_distance_125km", "125KM Journey", "Reach 125 kilometers total walking distance", "🌐", Metric::Distance, 125.0),
    AwardDefinition::cumulative("total_distance_150km", "150KM Journey", "Reach 150 kilometers total walking distance", "🌐", Metric::Distance, 150.0),
    AwardDefinition::cumulative("total_distance_175km", "175KM Journey", "Reach 175 kilometers total walking distance", "🌐", Metric::Distance, 175.0),
    AwardDefinition::cumulative("total_distance_200km", "200KM Journey", "Reach 200 kilometers total walking distance", "🌐", Metric::Distance, 200.0),
    AwardDefinition::cumulative("total_distance_225km", "225KM Journey", "Reach 225 kilometers total walking distance", "🌐", Metric::Distance, 225.0),
    AwardDefinition::cumulative("total_distance_250km", "Cross-Country Casual", "Reach 250 kilometers total walking distance", "🛤️", Metric::Distance, 250.0),
    AwardDefinition::cumulative("total_distance_500km", "Road Warrior", "Reach 500 kilometers total walking distance", "🛣️", Metric::Distance, 500.0),
    AwardDefinition::cumulative("total_distance_1000km", "Grand Tour", "Reach 1,000 kilometers total walking distance", "🌍", Metric::Distance, 1000.0),
    // Cumulative Calories
    AwardDefinition::cumulative("total_calories_250", "First Burn", "Burn 250 total calories", "🕯️", Metric::Calories, 250.0),
    AwardDefinition::cumulative("total_calories_500", "Warming Up", "Burn 500 total calories", "🔦", Metric::Calories, 500.0),
    AwardDefinition::cumulative("total_calories_750", "750 Calorie Burn", "Burn 750 total calories", "🕯️", Metric::Calories, 750.0),
    AwardDefinition::cumulative("total_calories_1k", "Calorie Burn Beginner", "Burn 1,000 total calories", "🔥", Metric::Calories, 1000.0),
    AwardDefinition::cumulative("total_calories_1500", "1,500 Calorie Burn", "Burn 1,500 total calories", "🔥", Metric::Calories, 1500.0),
    AwardDefinition::cumulative("total_calories_2k", "2,000 Calorie Burn", "Burn 2,000 total calories", "🔥", Metric::Calories, 2000.0),
    AwardDefinition::cumulative("total_calories_2500", "2,500 Calorie Burn", "Burn 2,500 total calories", "🔥", Metric::Calories, 2500.0),
    AwardDefinition::cumulative("total_calories_3k", "3,000 Calorie Burn", "Burn 3,000 total calories", "🔥", Metric::Calories, 3000.0),
    AwardDefinition::cumulative("total_calories_3500", "3,500 Calorie Burn", "Burn 3,500 total calories", "🌋", Metric::Calories, 3500.0),
    AwardDefinition::cumulative("total_calories_4k", "4,000 Calorie Burn", "Burn 4,000 total calories", "🌋", Metric::Calories, 4000.0),
    AwardDefinition::cumulative("total_calories_4500", "4,500 Calorie Burn", "Burn 4,500 total calories", "🌋", Metric::Calories, 4500.0),
    AwardDefinition::cumulative("total_calories_5k", "Calorie Crusader", "Burn 5,000 total calories", "🌋", Metric::Calories, 5000.0),
    AwardDefinition::cumulative("total_calories_6k", "6K Burner", "Burn 6,000 total calories", "🔥", Metric::Calories, 6000.0),
    AwardDefinition::cumulative("total_calories_5500", "5,500 Calorie Burn", "Burn 5,500 total calories", "🌋", Metric::Calories, 5500.0),
    AwardDefinition::cumulative("total_calories_6500", "6,500 Calorie Burn", "Burn 6,500 total calories", "🔥", Metric::Calories, 6500.0),
    AwardDefinition::cumulative("total_calories_7k", "7,000 Calorie Burn", "Burn 7,000 total calories", "🔥", Metric::Calories, 7000.0),
    AwardDefinition::cumulative("total_calories_7500", "7,500 Calorie Burn", "Burn 7,500 total calories", "🌋", Metric::Calories, 7500.0),
    AwardDefinition::cumulative("total_calories_8k", "8,000 Calorie Burn", "Burn 8,000 total calories", "🔥", Metric::Calories, 8000.0),
    AwardDefinition::cumulative("total_calories_9k", "9,000 Calorie Burn", "Burn 9,000 total calories", "🔥", Metric::Calories, 9000.0),
    AwardDefinition::cumulative("total_calories_9500", "9,500 Calorie Burn", "Burn 9,500 total calories", "🔥", Metric::Calories, 9500.0),
    AwardDefinition::cumulative("total_calories_10k", "Energy Elite", "Burn 10,000 total calories", "💥", Metric::Calories, 10_000.0),
    AwardDefinition::cumulative("total_calories_12500", "12,500 Calorie Burn", "Burn 12,500 total calories", "💥", Metric::Calories, 12_500.0),
    AwardDefinition::cumulative("total_calories_15k", "15,000 Calorie Burn", "Burn 15,000 total calories", "💥", Metric::Calories, 15_000.0),
    AwardDefinition::cumulative("total_calories_17500", "17,500 Calorie Burn", "Burn 17,500 total calories", "💥", Metric::Calories, 17_500.0),
    AwardDefinition::cumulative("total_calories_20k", "20,000 Calorie Burn", "Burn 20,000 total calories", "💥", Metric::Calories, 20_000.0),
    AwardDefinition::cumulative("total_calories_22500", "22,500 Calorie Burn", "Burn 22,500 total calories", "💥", Metric::Calories, 22_500.0),
    AwardDefinition::cumulative("total_calories_25k", "Thermic Titan", "Burn 25,000 total calories", "☄️", Metric::Calories, 25_000.0),
    AwardDefinition::cumulative("total_calories_30k", "30,000 Calorie Burn", "Burn 30,000 total calories", "☄️", Metric::Calories, 30_000.0),
    AwardDefinition::cumulative("total_calories_40k", "40,000 Calorie Burn", "Burn 40,000 total calories", "☄️", Metric::Calories, 40_000.0),
    AwardDefinition::cumulative("total_calories_50k", "Metabolic Master", "Burn 50,000 total calories", "☀️", Metric::Calories, 50_000.0),
    AwardDefinition::cumulative("total_calories_60k", "60,000 Calorie Burn", "Burn 60,000 total calories", "☀️", Metric::Calories, 60_000.0),
    AwardDefinition::cumulative("total_calories_70k", "70,000 Calorie Burn", "Burn 70,000 total calories", "☀️", Metric::Calories, 70_000.0),
    AwardDefinition::cumulative("total_calories_80k", "80,000 Calorie Burn", "Burn 80,000 total calories", "☀️", Metric::Calories, 80_000.0),
    AwardDefinition::cumulative("total_calories_90k", "90,000 Calorie Burn", "Burn 90,000 total calories", "☀️", Metric::Calories, 90_000.0),
];

/// Awards for consecutive goal days
#[rustfmt::skip]
pub const STREAK_AWARDS: &[AwardDefinition] = &[
    AwardDefinition::streak("streak_2", "Consistency Kickoff", "Meet your daily goal 2 days in a row", "🌱", 2),
    AwardDefinition::streak("streak_3", "3 Day Streak", "Meet your daily goal 3 days in a row", "⭐", 3),
    AwardDefinition::streak("streak_7", "Week Warrior", "Meet your daily goal 7 days in a row", "🌟", 7),
    AwardDefinition::streak("streak_14", "Two Week Champion", "Meet your daily goal 14 days in a row", "🏆", 14),
    AwardDefinition::streak("streak_21", "21 Day Habit", "Meet your daily goal 21 days in a row", "🎯", 21),
    AwardDefinition::streak("streak_30", "Month Master", "Meet your daily goal 30 days in a row", "👑", 30),
    AwardDefinition::streak("streak_60", "60 Day Legend", "Meet your daily goal 60 days in a row", "💎", 60),
    AwardDefinition::streak("streak_100", "Century Club", "Meet your daily goal 100 days in a row", "🏅", 100),
    AwardDefinition::streak("streak_365", "Year of Walking", "Meet your daily goal 365 days in a row", "🎖️", 365),
];

static STANDARD: Lazy<AwardCatalog> =
    Lazy::new(|| AwardCatalog::from_parts(ENTRY_AWARDS, CUMULATIVE_AWARDS, STREAK_AWARDS));

/// Read-only registry of award definitions, split by family
#[derive(Debug, Clone, Default)]
pub struct AwardCatalog {
    entry: Vec<AwardDefinition>,
    cumulative: Vec<AwardDefinition>,
    streak: Vec<AwardDefinition>,
}

impl AwardCatalog {
    /// The full built-in catalog
    pub fn standard() -> &'static AwardCatalog {
        &STANDARD
    }

    /// Build a catalog from definitions of any family, keeping their
    /// relative order within each family
    pub fn new(definitions: impl IntoIterator<Item = AwardDefinition>) -> Self {
        let mut catalog = Self::default();
        for def in definitions {
            match def.kind() {
                AwardKind::Entry => catalog.entry.push(def),
                AwardKind::Cumulative => catalog.cumulative.push(def),
                AwardKind::Streak => catalog.streak.push(def),
            }
        }
        catalog
    }

    fn from_parts(entry: &[AwardDefinition], cumulative: &[AwardDefinition], streak: &[AwardDefinition]) -> Self {
        Self::new(entry.iter().chain(cumulative).chain(streak).copied())
    }

    pub fn entry_awards(&self) -> &[AwardDefinition] {
        &self.entry
    }

    pub fn cumulative_awards(&self) -> &[AwardDefinition] {
        &self.cumulative
    }

    pub fn streak_awards(&self) -> &[AwardDefinition] {
        &self.streak
    }

    /// Every definition: entry awards, then streak, then cumulative
    pub fn iter(&self) -> impl Iterator<Item = &AwardDefinition> {
        self.entry.iter().chain(&self.streak).chain(&self.cumulative)
    }

    /// Total number of definitions across all families
    pub fn len(&self) -> usize {
        self.entry.len() + self.cumulative.len() + self.streak.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up any definition by id
    pub fn find(&self, id: &str) -> Option<&AwardDefinition> {
        self.iter().find(|def| def.id == id)
    }

    /// Ids that appear more than once; empty for a well-formed catalog
    pub fn duplicate_ids(&self) -> Vec<&'static str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for def in self.iter() {
            if !seen.insert(def.id) && !duplicates.contains(&def.id) {
                duplicates.push(def.id);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::awards::AwardRule;

    #[test]
    fn test_standard_catalog_sizes() {
        let catalog = AwardCatalog::standard();
        assert_eq!(catalog.entry_awards().len(), 99);
        assert_eq!(catalog.cumulative_awards().len(), 97);
        assert_eq!(catalog.streak_awards().len(), 9);
        assert_eq!(catalog.len(), 205);
    }

    #[test]
    fn test_standard_catalog_ids_unique() {
        assert!(AwardCatalog::standard().duplicate_ids().is_empty());
    }

    #[test]
    fn test_duplicate_ids_detected() {
        let a = AwardDefinition::streak("streak_2", "A", "", "", 2);
        let b = AwardDefinition::entry("streak_2", "B", "", "", EntryRule::MinSteps { steps: 1 });
        let catalog = AwardCatalog::new([a, b]);
        assert_eq!(catalog.duplicate_ids(), vec!["streak_2"]);
    }

    #[test]
    fn test_find_covers_all_families() {
        let catalog = AwardCatalog::standard();
        assert_eq!(catalog.find("first_entry").map(|d| d.kind()), Some(AwardKind::Entry));
        assert_eq!(catalog.find("streak_7").map(|d| d.kind()), Some(AwardKind::Streak));
        assert_eq!(
            catalog.find("total_steps_10k").map(|d| d.rule),
            Some(AwardRule::Cumulative { metric: Metric::Steps, threshold: 10_000.0 })
        );
        assert!(catalog.find("no_such_award").is_none());
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let catalog = AwardCatalog::standard();
        let first: Vec<&str> = catalog.entry_awards().iter().take(3).map(|d| d.id).collect();
        assert_eq!(first, vec!["first_entry", "steps_500", "steps_1k"]);
        let streak_days: Vec<Option<f64>> = catalog.streak_awards().iter().map(|d| d.threshold()).collect();
        assert_eq!(streak_days.first(), Some(&Some(2.0)));
        assert_eq!(streak_days.last(), Some(&Some(365.0)));
    }

    #[test]
    fn test_cumulative_thresholds_positive() {
        for def in AwardCatalog::standard().cumulative_awards() {
            let threshold = def.threshold().unwrap();
            assert!(threshold > 0.0, "{} has threshold {}", def.id, threshold);
        }
    }
}
