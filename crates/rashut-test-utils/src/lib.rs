//! Testing utilities for the Rashut dashboard workspace
//!
//! Record builders, a fixed sample data set and a scripted record source.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use rashut_model::{fields, Record};
use rashut_query::{QueryError, QueryFilters, RecordSource};
use std::collections::HashMap;
use std::time::Duration;

/// Fluent builder for test records
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Record with no fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Record done jointly with the shared IT service
    pub fn shared() -> Self {
        Self::new().field(fields::COMMON_SHAAM, "true")
    }

    /// Record done by the authority alone
    pub fn unshared() -> Self {
        Self::new().field(fields::COMMON_SHAAM, "false")
    }

    pub fn year(self, year: u16) -> Self {
        self.field(fields::START_YEAR, year.to_string())
    }

    pub fn category(self, code: &str) -> Self {
        self.field(fields::CATEGORY, code)
    }

    pub fn status(self, code: &str) -> Self {
        self.field(fields::STATUS, code)
    }

    pub fn verification(self, code: &str) -> Self {
        self.field(fields::VERIFICATION, code)
    }

    pub fn completion(self, fraction: &str) -> Self {
        self.field(fields::PERCENT_COMPLETE, fraction)
    }

    pub fn cancelled_in(self, year: u16) -> Self {
        self.field(fields::CANCELED_YEAR, year.to_string())
    }

    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.record.insert(name, value);
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

/// A small mixed data set spanning 2024 and 2025
///
/// For 2025 it holds 6 shared and 5 authority-only records.
pub fn sample_records() -> Vec<Record> {
    vec![
        // shared, 2025
        RecordBuilder::shared().year(2025).category("1").status("8").verification("6").completion("1").build(),
        RecordBuilder::shared().year(2025).category("4").status("8").completion("0.4").build(),
        RecordBuilder::shared().year(2025).category("1").verification("6").completion("0.2").build(),
        RecordBuilder::shared().year(2025).category("2").completion("0.6").build(),
        RecordBuilder::shared().year(2025).category("3").status("8").completion("1").build(),
        RecordBuilder::shared().year(2025).category("3").cancelled_in(2025).build(),
        // authority only, 2025
        RecordBuilder::unshared().year(2025).category("1").status("8").build(),
        RecordBuilder::unshared().year(2025).category("2").status("8").build(),
        RecordBuilder::unshared().year(2025).category("2").build(),
        RecordBuilder::unshared().year(2025).category("3").build(),
        RecordBuilder::unshared().year(2025).category("4").cancelled_in(2025).build(),
        // 2024
        RecordBuilder::shared().year(2024).category("1").status("8").completion("1").build(),
        RecordBuilder::unshared().year(2024).category("2").build(),
        RecordBuilder::unshared().year(2024).category("3").status("8").build(),
    ]
}

/// Scripted answer for one year
#[derive(Debug, Clone)]
struct Script {
    delay: Duration,
    outcome: Result<Vec<Record>, String>,
}

/// Record source answering per `year` filter with scripted delays
///
/// Years without a script answer immediately with the default records.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    scripts: HashMap<String, Script>,
    default: Vec<Record>,
    calls: Mutex<Vec<QueryFilters>>,
}

impl ScriptedSource {
    pub fn new(default: Vec<Record>) -> Self {
        Self {
            default,
            ..Self::default()
        }
    }

    /// Answer `year` with `records` after `delay`
    pub fn respond(mut self, year: u16, delay: Duration, records: Vec<Record>) -> Self {
        self.scripts.insert(
            year.to_string(),
            Script {
                delay,
                outcome: Ok(records),
            },
        );
        self
    }

    /// Fail queries for `year` after `delay`
    pub fn fail(mut self, year: u16, delay: Duration, message: &str) -> Self {
        self.scripts.insert(
            year.to_string(),
            Script {
                delay,
                outcome: Err(message.to_string()),
            },
        );
        self
    }

    /// Filters of every query received so far
    pub fn calls(&self) -> Vec<QueryFilters> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl RecordSource for ScriptedSource {
    async fn query(
        &self,
        _query_code: &str,
        filters: &QueryFilters,
    ) -> Result<Vec<Record>, QueryError> {
        self.calls.lock().push(filters.clone());

        let script = filters.get("year").and_then(|y| self.scripts.get(y)).cloned();
        match script {
            Some(script) => {
                tokio::time::sleep(script.delay).await;
                script.outcome.map_err(QueryError::Source)
            }
            None => Ok(self.default.clone()),
        }
    }
}
