//! Static race-plan data for the EcoTrail Paris 2026 page.
//!
//! Pure pass-through data: the page renderer iterates these rows into
//! tables and a profile chart, nothing more.

use serde::Serialize;

/// Race header facts.
pub const RACE_TITLE: &str = "Mon Plan EcoTrail Paris 2026 \u{1F5FC}";
pub const RACE_KEY_FIGURES: &str =
    "84,1 km – 1 264 m D+ – Objectif : 9 h 59 – Samedi 21 mars 2026";
pub const RACE_INTRO: &str = "Mon plan personnel de pacing, de nutrition et de mat\u{e9}riel \
pour franchir la Tour Eiffel avant la nuit.";

/// Course photo shown above the altitude profile.
pub const COURSE_PHOTO_URL: &str = "https://images.ctfassets.net/74s6y3stf7s4/2z5b6s1h9K4wG4e8y0u0Sg/51a31b40974cfc7961c944a942544c41/Ecotrail_Paris_80km_finish_2.jpg";
pub const COURSE_PHOTO_ALT: &str =
    "Coureur de l'EcoTrail Paris arrivant \u{e0} la Tour Eiffel";

/// Closing strategy summary.
pub const SUMMARY_QUOTE: &str = "\u{201c}Sur l\u{2019}EcoTrail Paris 84 km (1 264 m D+), mon objectif \
de 9 h 59 est r\u{e9}aliste. Je devrai consommer 2 900 kcal, boire 5,8 L d\u{2019}eau et g\u{e9}rer \
22 min de pauses. Les sections Versailles \u{2192} Meudon et Meudon \u{2192} Saint-Cloud seront \
d\u{e9}cisives. L\u{2019}arriv\u{e9}e \u{e0} la Tour Eiffel, de nuit, sera ma plus belle r\u{e9}compense.\u{201d}";
pub const SUMMARY_AUTHOR: &str = "- Yannick Delisle";

/// One sample of the altitude profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfilePoint {
    /// Distance from the start, km
    pub km: f64,
    /// Altitude, m
    pub altitude_m: f64,
}

/// One pacing segment between two checkpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PacingSegment {
    pub segment: &'static str,
    pub distance: &'static str,
    pub climb: &'static str,
    pub pace: &'static str,
    pub duration: &'static str,
    pub pause: &'static str,
    pub eta: &'static str,
}

/// One aid-station stop of the nutrition plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NutritionStop {
    pub station: &'static str,
    pub km: u32,
    pub eta: &'static str,
    pub drink: &'static str,
    pub eat: &'static str,
    pub caffeine: bool,
    pub pause: &'static str,
}

/// One mandatory-gear item with its race-control penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GearItem {
    pub icon: &'static str,
    pub item: &'static str,
    pub requirement: &'static str,
    pub penalty: &'static str,
}

pub const ELEVATION_PROFILE: [ProfilePoint; 6] = [
    ProfilePoint { km: 0.0, altitude_m: 160.0 },
    ProfilePoint { km: 10.0, altitude_m: 180.0 },
    ProfilePoint { km: 20.0, altitude_m: 140.0 },
    ProfilePoint { km: 40.0, altitude_m: 160.0 },
    ProfilePoint { km: 60.0, altitude_m: 200.0 },
    ProfilePoint { km: 84.1, altitude_m: 30.0 },
];

pub const PACING_PLAN: [PacingSegment; 5] = [
    PacingSegment {
        segment: "St-Quentin \u{2192} Buc",
        distance: "22 km",
        climb: "250 m",
        pace: "6\u{2019}20/km",
        duration: "2h07",
        pause: "4 min",
        eta: "12h50",
    },
    PacingSegment {
        segment: "Buc \u{2192} Versailles",
        distance: "19 km",
        climb: "300 m",
        pace: "6\u{2019}50/km",
        duration: "2h16",
        pause: "5 min",
        eta: "15h10",
    },
    PacingSegment {
        segment: "Versailles \u{2192} Meudon",
        distance: "17 km",
        climb: "450 m",
        pace: "7\u{2019}45/km",
        duration: "2h35",
        pause: "6 min",
        eta: "17h50",
    },
    PacingSegment {
        segment: "Meudon \u{2192} St-Cloud",
        distance: "17 km",
        climb: "250 m",
        pace: "8\u{2019}20/km",
        duration: "2h05",
        pause: "7 min",
        eta: "20h00",
    },
    PacingSegment {
        segment: "St-Cloud \u{2192} Tour Eiffel",
        distance: "9 km",
        climb: "50 m",
        pace: "8\u{2019}45/km",
        duration: "0h56",
        pause: "\u{2014}",
        eta: "21h00",
    },
];

pub const PACING_FOOTER_TOTAL: &str = "Total : 9 h 59";
pub const PACING_FOOTER_PAUSES: &str = "(22 min de pauses cumul\u{e9}es)";
pub const PACING_FOOTER_AVERAGE: &str = "8,4 km/h \u{2013} Allure 7\u{2019}08/km";

pub const NUTRITION_PLAN: [NutritionStop; 4] = [
    NutritionStop {
        station: "Buc",
        km: 22,
        eta: "12h50",
        drink: "500 ml",
        eat: "1 barre",
        caffeine: false,
        pause: "4 min",
    },
    NutritionStop {
        station: "Versailles",
        km: 41,
        eta: "15h10",
        drink: "500 ml",
        eat: "1 gel + 1 barre",
        caffeine: false,
        pause: "5 min",
    },
    NutritionStop {
        station: "Meudon",
        km: 58,
        eta: "17h50",
        drink: "700 ml",
        eat: "soupe + caf\u{e9}ine",
        caffeine: true,
        pause: "6 min",
    },
    NutritionStop {
        station: "St-Cloud",
        km: 75,
        eta: "20h00",
        drink: "500 ml",
        eat: "1 gel",
        caffeine: true,
        pause: "7 min",
    },
];

/// Nutrition totals shown in the table footer: label, figure.
pub const NUTRITION_TOTALS: [(&str, &str); 4] = [
    ("8 500", "kcal d\u{e9}pens\u{e9}es"),
    ("2 900", "kcal consomm\u{e9}es"),
    ("5,8 L", "d\u{2019}eau"),
    ("12 gels", "4 barres"),
];

pub const MANDATORY_GEAR: [GearItem; 9] = [
    GearItem {
        icon: "\u{1F4A7}",
        item: "R\u{e9}serve d\u{2019}eau",
        requirement: "minimum 1,5 L",
        penalty: "2 min",
    },
    GearItem {
        icon: "\u{1F35E}",
        item: "R\u{e9}serve alimentaire",
        requirement: "\u{2014}",
        penalty: "\u{2014}",
    },
    GearItem {
        icon: "\u{1F964}",
        item: "Gobelet 15cl",
        requirement: "minimum",
        penalty: "30 sec",
    },
    GearItem {
        icon: "\u{1F526}",
        item: "Lampe frontale",
        requirement: "obligatoire",
        penalty: "2 min",
    },
    GearItem {
        icon: "\u{1F9BA}",
        item: "Brassard r\u{e9}fl\u{e9}chissant",
        requirement: "obligatoire",
        penalty: "2 min",
    },
    GearItem {
        icon: "\u{1F9E3}",
        item: "Couverture de survie",
        requirement: "obligatoire",
        penalty: "2 min",
    },
    GearItem {
        icon: "\u{1F4F1}",
        item: "T\u{e9}l\u{e9}phone portable",
        requirement: "obligatoire",
        penalty: "2 min",
    },
    GearItem {
        icon: "\u{1FAAA}",
        item: "Pi\u{e8}ce d\u{2019}identit\u{e9}",
        requirement: "obligatoire",
        penalty: "disqualification",
    },
    GearItem {
        icon: "\u{1F4B3}",
        item: "Moyen de paiement",
        requirement: "recommand\u{e9}",
        penalty: "\u{2014}",
    },
];

pub const GEAR_WARNING: &str =
    "\u{26A0}\u{FE0F} P\u{e9}nalit\u{e9}s en cas de non-respect : jusqu\u{2019}\u{e0} disqualification.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_distances_increase_and_cover_the_course() {
        for pair in ELEVATION_PROFILE.windows(2) {
            assert!(pair[0].km < pair[1].km);
        }
        assert_eq!(ELEVATION_PROFILE.last().unwrap().km, 84.1);
    }

    #[test]
    fn nutrition_stops_sit_inside_the_course() {
        for stop in NUTRITION_PLAN {
            assert!(stop.km > 0 && (stop.km as f64) < 84.1, "{}", stop.station);
        }
    }

    #[test]
    fn table_row_counts_match_the_plan() {
        assert_eq!(PACING_PLAN.len(), 5);
        assert_eq!(NUTRITION_PLAN.len(), 4);
        assert_eq!(MANDATORY_GEAR.len(), 9);
    }

    #[test]
    fn rows_serialize_with_stable_field_names() {
        let json = serde_json::to_value(NUTRITION_PLAN[2]).unwrap();
        assert_eq!(json["station"], "Meudon");
        assert_eq!(json["caffeine"], true);
        assert_eq!(json["km"], 58);
    }
}
