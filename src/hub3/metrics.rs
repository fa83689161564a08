use std::collections::HashMap;

use metrics::{counter, Counter};
use strum::IntoEnumIterator;

use crate::hub3::field::Hub3Field;
use crate::observability::labels::{Labels, NO_LABEL};

const FIELD: &str = "field";

pub struct Hub3Metrics {
    encoded: Counter,
    rejected: HashMap<Hub3Field, Counter>,
    truncated_fields: HashMap<Hub3Field, Counter>,
}

impl Hub3Metrics {
    pub fn new(labels: &Labels) -> Self {
        let per_field = |name: &'static str| {
            Hub3Field::iter()
                .map(|field| {
                    let field_name: &'static str = field.into();
                    let field_labels = labels.clone_with_labels(&[(FIELD, field_name)]);
                    (field, counter!(name, field_labels))
                })
                .collect::<HashMap<_, _>>()
        };

        Hub3Metrics {
            encoded: counter!("hub3.encoded", labels.clone()),
            rejected: per_field("hub3.rejected"),
            truncated_fields: per_field("hub3.truncated_fields"),
        }
    }

    pub fn encoded(&self) {
        self.encoded.increment(1);
    }

    pub fn rejected(&self, field: Hub3Field) {
        if let Some(counter) = self.rejected.get(&field) {
            counter.increment(1);
        }
    }

    pub fn truncated(&self, field: Hub3Field) {
        if let Some(counter) = self.truncated_fields.get(&field) {
            counter.increment(1);
        }
    }
}

impl Default for Hub3Metrics {
    fn default() -> Self {
        Hub3Metrics::new(&NO_LABEL)
    }
}
