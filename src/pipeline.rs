// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! One kubequery run: expand macros, fetch the listing, evaluate the query
//!
//! Macros are expanded before kubectl runs so an unknown or malformed macro
//! fails without touching the cluster.

use serde_json::Value;
use tracing::{debug, info};

use crate::config::Presets;
use crate::error::Result;
use crate::jq::QueryEvaluator;
use crate::kubectl::ResourceSource;
use crate::query::QueryPlan;

/// What to fetch and how to query it
#[derive(Debug, Clone)]
pub struct Request {
    pub resource: String,
    pub plan: QueryPlan,
    /// Arguments passed through to kubectl unchanged
    pub forwarded: Vec<String>,
}

pub struct Pipeline<S, E> {
    source: S,
    evaluator: E,
}

impl<S: ResourceSource, E: QueryEvaluator> Pipeline<S, E> {
    pub fn new(source: S, evaluator: E) -> Self {
        Self { source, evaluator }
    }

    pub fn run(&self, request: &Request, presets: &Presets) -> Result<Vec<Value>> {
        let query = request.plan.build(presets)?;
        info!(query = %query, "Assembled query");

        let document = self.source.fetch(&request.resource, &request.forwarded)?;
        let results = self.evaluator.evaluate(&query, &document)?;
        debug!(results = results.len(), "Query evaluated");

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, EvalError, ExpandError, FetchError};
    use crate::presets::BUILTIN_PRESETS;
    use serde_json::json;
    use std::cell::RefCell;

    /// Records calls and returns a fixed document
    #[derive(Default)]
    struct FakeSource {
        document: Value,
        calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl ResourceSource for FakeSource {
        fn fetch(&self, resource: &str, forwarded: &[String]) -> Result<Value, FetchError> {
            self.calls
                .borrow_mut()
                .push((resource.to_string(), forwarded.to_vec()));
            Ok(self.document.clone())
        }
    }

    /// Records the query and echoes the document's item names
    #[derive(Default)]
    struct FakeEvaluator {
        queries: RefCell<Vec<String>>,
    }

    impl QueryEvaluator for FakeEvaluator {
        fn evaluate(&self, query: &str, input: &Value) -> Result<Vec<Value>, EvalError> {
            self.queries.borrow_mut().push(query.to_string());
            Ok(input["items"]
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .map(|item| json!([item["metadata"]["name"]]))
                        .collect()
                })
                .unwrap_or_default())
        }
    }

    struct FailingEvaluator;

    impl QueryEvaluator for FailingEvaluator {
        fn evaluate(&self, query: &str, _input: &Value) -> Result<Vec<Value>, EvalError> {
            Err(EvalError::Query {
                query: query.to_string(),
                message: "syntax error".to_string(),
            })
        }
    }

    fn request(filter: Option<&str>, select: Option<&str>) -> Request {
        Request {
            resource: "pods".to_string(),
            plan: QueryPlan::from_flags(filter, select),
            forwarded: vec!["-n".to_string(), "default".to_string()],
        }
    }

    fn pods() -> Value {
        json!({"items": [
            {"metadata": {"name": "web-1"}},
            {"metadata": {"name": "web-2"}},
        ]})
    }

    #[test]
    fn test_run_passes_query_and_arguments() {
        let pipeline = Pipeline::new(
            FakeSource {
                document: pods(),
                ..Default::default()
            },
            FakeEvaluator::default(),
        );
        let presets = Presets::from(&BUILTIN_PRESETS);

        let results = pipeline
            .run(&request(Some("podsForName(web)"), Some("name()")), &presets)
            .unwrap();

        assert_eq!(results, vec![json!(["web-1"]), json!(["web-2"])]);
        assert_eq!(
            pipeline.source.calls.borrow().as_slice(),
            &[(
                "pods".to_string(),
                vec!["-n".to_string(), "default".to_string()]
            )]
        );
        assert_eq!(
            pipeline.evaluator.queries.borrow().as_slice(),
            &[r#"items[] | select(.metadata.name | test("web")) | [.metadata.name]"#.to_string()]
        );
    }

    #[test]
    fn test_unknown_macro_does_not_fetch() {
        let pipeline = Pipeline::new(FakeSource::default(), FakeEvaluator::default());
        let presets = Presets::from(&BUILTIN_PRESETS);

        let err = pipeline
            .run(&request(Some("doesNotExist()"), None), &presets)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Expand(ExpandError::UnknownMacro { .. })
        ));
        assert!(pipeline.source.calls.borrow().is_empty());
        assert!(pipeline.evaluator.queries.borrow().is_empty());
    }

    #[test]
    fn test_syntax_error_does_not_fetch() {
        let pipeline = Pipeline::new(FakeSource::default(), FakeEvaluator::default());
        let presets = Presets::from(&BUILTIN_PRESETS);

        let err = pipeline
            .run(&request(Some("podsForName"), None), &presets)
            .unwrap_err();

        assert!(matches!(err, Error::Expand(ExpandError::Syntax(_))));
        assert!(pipeline.source.calls.borrow().is_empty());
    }

    #[test]
    fn test_evaluation_error_propagates() {
        let pipeline = Pipeline::new(
            FakeSource {
                document: pods(),
                ..Default::default()
            },
            FailingEvaluator,
        );
        let presets = Presets::from(&BUILTIN_PRESETS);

        let err = pipeline.run(&request(None, None), &presets).unwrap_err();
        assert!(matches!(err, Error::Eval(EvalError::Query { .. })));
    }
}
