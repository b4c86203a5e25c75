//! Remote Seeding
//!
//! One-shot GET against the public demo todos endpoint. The response is
//! shuffled with random sort keys, cut down to three items and mapped to
//! local todos; the caller replaces the whole list with the result.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::Todo;

/// Public demo endpoint the Random button pulls from
pub const TODOS_ENDPOINT: &str = "https://dummyjson.com/todos";

/// How many remote items survive the shuffle
pub const SEED_COUNT: usize = 3;

/// One entry of the remote payload; extra fields are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteTodo {
    pub todo: String,
    pub completed: bool,
}

/// Envelope of the remote payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteTodosResponse {
    pub todos: Vec<RemoteTodo>,
}

/// Fetch the demo endpoint and map it to a fresh three-item todo list
pub async fn fetch_random_todos() -> Result<Vec<Todo>, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let response = JsFuture::from(window.fetch_with_str(TODOS_ENDPOINT))
        .await
        .map_err(|err| format!("{err:?}"))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    let json = JsFuture::from(response.json().map_err(|err| format!("{err:?}"))?)
        .await
        .map_err(|err| format!("{err:?}"))?;
    let payload: RemoteTodosResponse =
        serde_wasm_bindgen::from_value(json).map_err(|err| err.to_string())?;

    Ok(seed_todos(payload.todos, js_sys::Math::random))
}

/// Shuffle `items` by assigning each a sort key drawn from `sort_key`,
/// keep the first `SEED_COUNT` and map them to local todos. The key source
/// is injected so the shuffle is deterministic under test.
pub fn seed_todos(items: Vec<RemoteTodo>, mut sort_key: impl FnMut() -> f64) -> Vec<Todo> {
    let mut keyed: Vec<(f64, RemoteTodo)> = items
        .into_iter()
        .map(|item| (sort_key() + 1.0, item))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    keyed
        .into_iter()
        .take(SEED_COUNT)
        .map(|(_, item)| Todo::with_completed(&item.todo, item.completed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{truncate_title, MAX_TITLE_LEN};

    // Shape of https://dummyjson.com/todos, shortened
    const SAMPLE: &str = r#"{
        "todos": [
            { "id": 1, "todo": "Do something nice for someone you care about", "completed": true, "userId": 152 },
            { "id": 2, "todo": "Memorize a poem", "completed": false, "userId": 13 },
            { "id": 3, "todo": "Watch a classic movie", "completed": false, "userId": 4 },
            { "id": 4, "todo": "Contribute code to open source", "completed": false, "userId": 127 }
        ],
        "total": 254,
        "skip": 0,
        "limit": 30
    }"#;

    fn sample() -> Vec<RemoteTodo> {
        let payload: RemoteTodosResponse = serde_json::from_str(SAMPLE).unwrap();
        payload.todos
    }

    /// Cycles through a fixed key sequence instead of Math.random
    fn keys(seq: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut idx = 0;
        move || {
            let key = seq[idx % seq.len()];
            idx += 1;
            key
        }
    }

    #[test]
    fn payload_parsing_ignores_extra_fields() {
        let todos = sample();
        assert_eq!(todos.len(), 4);
        assert_eq!(todos[1].todo, "Memorize a poem");
        assert!(todos[0].completed);
    }

    #[test]
    fn seeding_keeps_exactly_three_items() {
        let seeded = seed_todos(sample(), keys(&[0.4, 0.2, 0.8, 0.6]));
        assert_eq!(seeded.len(), SEED_COUNT);
    }

    #[test]
    fn seeding_orders_by_sort_key() {
        // Keys put item 2 first, then 1, then 4; item 3 is dropped.
        let seeded = seed_todos(sample(), keys(&[0.2, 0.1, 0.9, 0.3]));
        assert_eq!(seeded[0].title, "Memorize a poem");
        assert_eq!(
            seeded[1].title,
            truncate_title("Do something nice for someone you care about")
        );
        assert_eq!(seeded[2].title, "Contribute code to open source");
    }

    #[test]
    fn seeded_titles_are_truncated() {
        let seeded = seed_todos(sample(), keys(&[0.0, 0.5, 0.6, 0.7]));
        assert!(seeded
            .iter()
            .all(|todo| todo.title.chars().count() <= MAX_TITLE_LEN));
        // The over-limit first item gets cut to exactly the limit.
        assert_eq!(seeded[0].title.chars().count(), MAX_TITLE_LEN);
    }

    #[test]
    fn seeding_copies_completion_and_mints_fresh_ids() {
        let seeded = seed_todos(sample(), keys(&[0.0, 0.1, 0.2, 0.3]));
        assert!(seeded[0].completed);
        assert!(!seeded[1].completed);
        assert_ne!(seeded[0].id, seeded[1].id);
        assert_ne!(seeded[1].id, seeded[2].id);
    }

    #[test]
    fn seeding_fewer_than_three_keeps_all() {
        let two = sample().into_iter().take(2).collect::<Vec<_>>();
        let seeded = seed_todos(two, keys(&[0.5, 0.1]));
        assert_eq!(seeded.len(), 2);
    }

    #[test]
    fn seeding_an_empty_payload_yields_an_empty_list() {
        let seeded = seed_todos(Vec::new(), keys(&[0.5]));
        assert!(seeded.is_empty());
    }
}
