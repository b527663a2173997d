//! Dashboard KPI snapshot

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCharacter {
    pub character: String,
    pub count: u64,
}

/// Aggregate usage metrics, recomputed server-side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub active_users: u64,
    #[serde(default)]
    pub daily_games: u64,
    #[serde(default)]
    pub total_attempts: u64,
    /// Mode name -> success rate, in backend order
    #[serde(default)]
    pub success_rate: IndexMap<String, f64>,
    /// Mode name -> most guessed characters, in backend order
    #[serde(default)]
    pub top_characters: IndexMap<String, Vec<TopCharacter>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_partial_kpi() {
        let kpi: Kpi = serde_json::from_str(
            r#"{"totalUsers":120,"dailyGames":14,
                "topCharacters":{"EMOJI":[{"character":"Shrek","count":9}]}}"#,
        )
        .unwrap();
        assert_eq!(kpi.total_users, 120);
        assert_eq!(kpi.active_users, 0);
        assert!(kpi.success_rate.is_empty());
        assert_eq!(kpi.top_characters["EMOJI"][0].character, "Shrek");
    }

    #[test]
    fn test_modes_keep_backend_order() {
        let kpi: Kpi = serde_json::from_str(
            r#"{"successRate":{"IMAGE":0.4,"EMOJI":0.7,"CHARACTERISTICS":0.5},
                "topCharacters":{"IMAGE":[],"EMOJI":[],"DESCRIPTION":[]}}"#,
        )
        .unwrap();
        let rates: Vec<&str> = kpi.success_rate.keys().map(String::as_str).collect();
        assert_eq!(rates, ["IMAGE", "EMOJI", "CHARACTERISTICS"]);
        let modes: Vec<&str> = kpi.top_characters.keys().map(String::as_str).collect();
        assert_eq!(modes, ["IMAGE", "EMOJI", "DESCRIPTION"]);
    }
}
