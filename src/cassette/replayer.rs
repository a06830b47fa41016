//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Replays a cassette, keeping one FIFO queue per `port::method` pair.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Index a loaded cassette for replay.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Take the next interaction recorded for `port` and `method`.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the pair.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let available = self.available();
        let Some(queue) = self.queues.get_mut(&(port.to_string(), method.to_string())) else {
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{available}]"
            );
        };
        queue.pop_front().unwrap_or_else(|| {
            panic!(
                "Cassette exhausted: all interactions for port={port:?} method={method:?} \
                 have been consumed."
            )
        })
    }

    /// Interactions not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    fn available(&self) -> String {
        let mut pairs: Vec<String> =
            self.queues.keys().map(|(port, method)| format!("{port}::{method}")).collect();
        pairs.sort();
        pairs.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str) -> Interaction {
        Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input: json!({}),
            output: json!({"Ok": null}),
        }
    }

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette { name: "test".into(), recorded_at: Utc::now(), commit: "abc".into(), interactions }
    }

    #[test]
    fn replay_in_order_per_port() {
        let cassette = make_cassette(vec![
            interaction(0, "translator", "translate"),
            interaction(1, "object_store", "upload"),
            interaction(2, "translator", "translate"),
        ]);

        let mut replayer = CassetteReplayer::new(&cassette);
        assert_eq!(replayer.remaining(), 3);

        assert_eq!(replayer.next_interaction("translator", "translate").seq, 0);
        assert_eq!(replayer.next_interaction("translator", "translate").seq, 2);
        assert_eq!(replayer.next_interaction("object_store", "upload").seq, 1);
        assert_eq!(replayer.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_replayer_panics() {
        let cassette = make_cassette(vec![interaction(0, "callback", "send")]);

        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_interaction("callback", "send");
        let _ = replayer.next_interaction("callback", "send"); // panics
    }

    #[test]
    #[should_panic(expected = "Available port::method pairs: [translator::translate]")]
    fn unknown_port_panics() {
        let cassette = make_cassette(vec![interaction(0, "translator", "translate")]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_interaction("callback", "send");
    }
}
