// src/stats.rs
//
// Estadísticas acumuladas del usuario. Cada cambio es una transición pura
// `reduce(estado, acción) -> estado'`; el controlador persiste después.

use crate::model::QuestionKind;
use crate::storage::{json_field, json_object};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_answered: u32,
    pub correct_count: u32,
    pub wrong_question_ids: Vec<String>,
    pub practice_progress: BTreeMap<QuestionKind, usize>,
    pub favorite_question_ids: Vec<String>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_answered: 0,
            correct_count: 0,
            wrong_question_ids: vec![],
            practice_progress: seeded_progress(),
            favorite_question_ids: vec![],
        }
    }
}

fn seeded_progress() -> BTreeMap<QuestionKind, usize> {
    QuestionKind::ALL.iter().map(|k| (*k, 0)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatsAction {
    RecordAnswer { is_correct: bool, question_id: String },
    SetPracticeProgress { kind: QuestionKind, index: usize },
    ToggleFavorite { question_id: String },
}

impl UserStats {
    pub fn reduce(mut self, action: StatsAction) -> Self {
        match action {
            StatsAction::RecordAnswer {
                is_correct,
                question_id,
            } => {
                self.total_answered += 1;
                if is_correct {
                    self.correct_count += 1;
                    self.wrong_question_ids.retain(|id| *id != question_id);
                } else if !self.wrong_question_ids.contains(&question_id) {
                    self.wrong_question_ids.push(question_id);
                }
            }
            StatsAction::SetPracticeProgress { kind, index } => {
                self.practice_progress.insert(kind, index);
            }
            StatsAction::ToggleFavorite { question_id } => {
                if let Some(pos) = self
                    .favorite_question_ids
                    .iter()
                    .position(|id| *id == question_id)
                {
                    self.favorite_question_ids.remove(pos);
                } else {
                    self.favorite_question_ids.push(question_id);
                }
            }
        }
        self
    }

    pub fn practice_cursor(&self, kind: QuestionKind) -> usize {
        self.practice_progress.get(&kind).copied().unwrap_or(0)
    }

    pub fn is_wrong(&self, id: &str) -> bool {
        self.wrong_question_ids.iter().any(|w| w == id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorite_question_ids.iter().any(|f| f == id)
    }

    /// Porcentaje de aciertos redondeado (0 si aún no hay respuestas)
    pub fn accuracy_percent(&self) -> u32 {
        if self.total_answered == 0 {
            return 0;
        }
        (self.correct_count as f64 * 100.0 / self.total_answered as f64).round() as u32
    }

    /// Respuestas totales respecto al tamaño del banco, en porcentaje
    pub fn coverage_percent(&self, bank_len: usize) -> u32 {
        if bank_len == 0 {
            return 0;
        }
        (self.total_answered as f64 * 100.0 / bank_len as f64).round() as u32
    }

    /// Carga tolerante: cada campo ausente o mal formado toma su valor por
    /// defecto sin descartar el resto.
    pub fn from_json_lenient(text: &str) -> Self {
        let mut stats = Self::default();
        let Some(obj) = json_object(text, "stats") else {
            return stats;
        };

        if let Some(v) = json_field(&obj, "stats", "totalAnswered") {
            stats.total_answered = v;
        }
        if let Some(v) = json_field(&obj, "stats", "correctCount") {
            stats.correct_count = v;
        }
        if let Some(ids) = json_field::<Vec<String>>(&obj, "stats", "wrongQuestionIds") {
            stats.wrong_question_ids = dedup_ids(ids);
        }
        if let Some(ids) = json_field::<Vec<String>>(&obj, "stats", "favoriteQuestionIds") {
            stats.favorite_question_ids = dedup_ids(ids);
        }
        if let Some(Value::Object(progress)) = obj.get("practiceProgress") {
            for (key, value) in progress {
                let kind = serde_json::from_value::<QuestionKind>(Value::String(key.clone()));
                let index = serde_json::from_value::<usize>(value.clone());
                match (kind, index) {
                    (Ok(kind), Ok(index)) => {
                        stats.practice_progress.insert(kind, index);
                    }
                    _ => log::warn!("ignoring practice cursor {key}={value}"),
                }
            }
        }

        // correct_count <= total_answered
        stats.correct_count = stats.correct_count.min(stats.total_answered);
        stats
    }
}

fn dedup_ids(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashMap;

    fn answer(stats: UserStats, ok: bool, id: &str) -> UserStats {
        stats.reduce(StatsAction::RecordAnswer {
            is_correct: ok,
            question_id: id.to_string(),
        })
    }

    #[test]
    fn counters_and_wrong_set_follow_latest_answer() {
        let mut s = UserStats::default();
        s = answer(s, false, "q1");
        s = answer(s, false, "q1");
        s = answer(s, false, "q2");
        assert_eq!(s.wrong_question_ids, vec!["q1", "q2"]);
        s = answer(s, true, "q1");
        assert_eq!(s.wrong_question_ids, vec!["q2"]);
        s = answer(s, true, "never-wrong");
        assert_eq!(s.total_answered, 5);
        assert_eq!(s.correct_count, 2);
    }

    #[test]
    fn random_histories_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        let ids = ["a", "b", "c", "d"];
        let mut s = UserStats::default();
        let mut last: HashMap<&str, bool> = HashMap::new();
        for n in 1..=500u32 {
            let id = ids[rng.gen_range(0..ids.len())];
            let ok = rng.gen_bool(0.5);
            s = answer(s, ok, id);
            last.insert(id, ok);
            assert_eq!(s.total_answered, n);
            assert!(s.correct_count <= s.total_answered);
        }
        for id in ids {
            let expected_wrong = last.get(id).map(|ok| !ok).unwrap_or(false);
            assert_eq!(s.is_wrong(id), expected_wrong, "id {id}");
        }
    }

    #[test]
    fn practice_cursor_only_touches_its_category() {
        let s = UserStats::default().reduce(StatsAction::SetPracticeProgress {
            kind: QuestionKind::MultiChoice,
            index: 42,
        });
        assert_eq!(s.practice_cursor(QuestionKind::MultiChoice), 42);
        assert_eq!(s.practice_cursor(QuestionKind::SingleChoice), 0);
        assert_eq!(s.practice_cursor(QuestionKind::TrueFalse), 0);
    }

    #[test]
    fn favorites_toggle_symmetrically() {
        let toggle = |s: UserStats, id: &str| {
            s.reduce(StatsAction::ToggleFavorite {
                question_id: id.to_string(),
            })
        };
        let s = toggle(UserStats::default(), "q1");
        let s = toggle(s, "q2");
        assert!(s.is_favorite("q1") && s.is_favorite("q2"));
        let s = toggle(s, "q1");
        assert!(!s.is_favorite("q1"));
        assert_eq!(s.favorite_question_ids, vec!["q2"]);
    }

    #[test]
    fn serialized_shape_uses_storage_field_names() {
        let s = answer(UserStats::default(), false, "q9");
        let json = serde_json::to_value(&s).expect("json");
        assert_eq!(json["totalAnswered"], 1);
        assert_eq!(json["wrongQuestionIds"][0], "q9");
        assert_eq!(json["practiceProgress"]["true_false"], 0);
        assert!(json["favoriteQuestionIds"].as_array().is_some());
    }

    #[test]
    fn corrupt_field_falls_back_while_others_survive() {
        let mut s = answer(UserStats::default(), true, "q1");
        s = answer(s, false, "q2");
        s = s.reduce(StatsAction::ToggleFavorite {
            question_id: "q3".into(),
        });
        let mut json = serde_json::to_value(&s).expect("json");
        json["wrongQuestionIds"] = Value::String("not a list".into());

        let loaded = UserStats::from_json_lenient(&json.to_string());
        assert!(loaded.wrong_question_ids.is_empty());
        assert_eq!(loaded.total_answered, 2);
        assert_eq!(loaded.correct_count, 1);
        assert_eq!(loaded.favorite_question_ids, vec!["q3"]);
    }

    #[test]
    fn missing_and_unparseable_entries_load_defaults() {
        assert_eq!(UserStats::from_json_lenient("{not json"), UserStats::default());
        assert_eq!(UserStats::from_json_lenient("[1,2]"), UserStats::default());

        // Formato antiguo: sin favoritos y con la grafía china de las categorías
        let legacy = r#"{"totalAnswered":4,"correctCount":9,"wrongQuestionIds":["x","x"],
            "practiceProgress":{"判断题":3,"单选题":"bad"}}"#;
        let loaded = UserStats::from_json_lenient(legacy);
        assert_eq!(loaded.total_answered, 4);
        assert_eq!(loaded.correct_count, 4);
        assert_eq!(loaded.wrong_question_ids, vec!["x"]);
        assert_eq!(loaded.practice_cursor(QuestionKind::TrueFalse), 3);
        assert_eq!(loaded.practice_cursor(QuestionKind::SingleChoice), 0);
        assert!(loaded.favorite_question_ids.is_empty());
    }

    #[test]
    fn accuracy_rounds_and_handles_empty_history() {
        assert_eq!(UserStats::default().accuracy_percent(), 0);
        let mut s = answer(UserStats::default(), true, "a");
        s = answer(s, true, "b");
        s = answer(s, false, "c");
        assert_eq!(s.accuracy_percent(), 67);
        assert_eq!(s.coverage_percent(6), 50);
        assert_eq!(s.coverage_percent(0), 0);
    }
}
