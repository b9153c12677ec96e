#![forbid(unsafe_code)]
//! Wire contract for the academy read API: the error envelope, request
//! parsing, page payload builders, and the OpenAPI document. The server crate
//! turns these into responses; nothing here touches HTTP directly.

use aljude_academy_assess::{AnswerLevel, ScoreBreakdown};
use aljude_academy_model::{Assessment, Capability, Catalog, Category, SubCapability};
use aljude_academy_query::{CapabilityRef, SearchResult, SubCapabilityNeighbors, SubCapabilityRef};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub const CRATE_NAME: &str = "aljude-academy-api";
pub const API_VERSION: &str = "v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidQueryParameter,
    MissingQueryParameter,
    NotFound,
    InvalidRequestBody,
    IncompleteAssessment,
    UnknownQuestion,
    Internal,
}

impl ApiErrorCode {
    #[must_use]
    pub fn http_status(self) -> u16 {
        match self {
            Self::InvalidQueryParameter
            | Self::MissingQueryParameter
            | Self::InvalidRequestBody
            | Self::IncompleteAssessment
            | Self::UnknownQuestion => 400,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn missing_param(name: &str) -> Self {
        Self {
            code: ApiErrorCode::MissingQueryParameter,
            message: format!("missing query parameter: {name}"),
            details: json!({"parameter": name}),
        }
    }

    #[must_use]
    pub fn category_not_found(slug: &str) -> Self {
        Self {
            code: ApiErrorCode::NotFound,
            message: "category not found".to_string(),
            details: json!({"category_slug": slug}),
        }
    }

    #[must_use]
    pub fn capability_not_found(slug: &str) -> Self {
        Self {
            code: ApiErrorCode::NotFound,
            message: "capability not found".to_string(),
            details: json!({"capability_slug": slug}),
        }
    }

    #[must_use]
    pub fn sub_capability_not_found(capability_slug: &str, sub_slug: &str) -> Self {
        Self {
            code: ApiErrorCode::NotFound,
            message: "sub-capability not found".to_string(),
            details: json!({"capability_slug": capability_slug, "sub_slug": sub_slug}),
        }
    }

    #[must_use]
    pub fn invalid_body(message: &str) -> Self {
        Self {
            code: ApiErrorCode::InvalidRequestBody,
            message: "invalid request body".to_string(),
            details: json!({"message": message}),
        }
    }

    #[must_use]
    pub fn internal(message: &str) -> Self {
        Self {
            code: ApiErrorCode::Internal,
            message: "internal error".to_string(),
            details: json!({"message": message}),
        }
    }
}

/// Score submission body for `POST /v1/assessments/{cap}/{sub}/score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreRequest {
    pub answers: BTreeMap<String, AnswerLevel>,
}

/// Submission gate for assessment scoring. The scorer itself tolerates
/// partial answer sets, so unknown and missing question ids are rejected
/// here, before scoring.
pub fn validate_score_request(
    request: &ScoreRequest,
    assessment: &Assessment,
) -> Result<(), ApiError> {
    let unknown: Vec<&str> = request
        .answers
        .keys()
        .filter(|id| !assessment.questions.iter().any(|q| &q.id == *id))
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        return Err(ApiError {
            code: ApiErrorCode::UnknownQuestion,
            message: "answers reference unknown question ids".to_string(),
            details: json!({"unknown_ids": unknown}),
        });
    }
    let missing: Vec<&str> = assessment
        .questions
        .iter()
        .filter(|q| !request.answers.contains_key(&q.id))
        .map(|q| q.id.as_str())
        .collect();
    if !missing.is_empty() {
        return Err(ApiError {
            code: ApiErrorCode::IncompleteAssessment,
            message: "every question must be answered before scoring".to_string(),
            details: json!({"missing_ids": missing}),
        });
    }
    Ok(())
}

pub mod params {
    use super::ApiError;
    use std::collections::BTreeMap;

    /// Pulls `q` out of the query string. A present-but-blank query is valid
    /// (search returns zero results for it); an absent `q` is not.
    pub fn parse_search_query(query: &BTreeMap<String, String>) -> Result<String, ApiError> {
        query
            .get("q")
            .cloned()
            .ok_or_else(|| ApiError::missing_param("q"))
    }
}

fn category_summary(category: &Category) -> Value {
    json!({
        "slug": category.slug,
        "name": category.name,
        "short_label": category.short_label,
        "icon": category.icon,
        "description": category.description,
        "capability_count": category.capabilities.len(),
        "href": category.href(),
    })
}

fn capability_card(capability: &Capability) -> Value {
    json!({
        "slug": capability.slug,
        "name": capability.name,
        "promise": capability.promise,
        "time_estimate": capability.time_estimate,
        "implementation_days": capability.implementation_days,
        "sub_capability_count": capability.sub_capabilities.len(),
        "href": capability.href(),
    })
}

fn sub_capability_card(capability: &Capability, sub: &SubCapability) -> Value {
    json!({
        "slug": sub.slug,
        "name": sub.name,
        "benefit": sub.benefit,
        "href": sub.href(&capability.slug),
    })
}

#[must_use]
pub fn categories_payload(catalog: &Catalog) -> Value {
    json!({
        "categories": catalog.categories.iter().map(category_summary).collect::<Vec<_>>(),
    })
}

#[must_use]
pub fn category_payload(category: &Category) -> Value {
    let mut payload = category_summary(category);
    payload["capabilities"] = Value::Array(
        category
            .capabilities
            .iter()
            .map(capability_card)
            .collect::<Vec<_>>(),
    );
    payload
}

#[must_use]
pub fn capability_payload(found: &CapabilityRef<'_>) -> Value {
    let capability = found.capability;
    json!({
        "category": {
            "slug": found.category.slug,
            "name": found.category.name,
            "href": found.category.href(),
        },
        "slug": capability.slug,
        "name": capability.name,
        "promise": capability.promise,
        "definition": capability.definition,
        "outcomes": capability.outcomes,
        "deliverables": capability.deliverables,
        "time_estimate": capability.time_estimate,
        "implementation_days": capability.implementation_days,
        "faq": capability.faq,
        "href": capability.href(),
        "sub_capabilities": capability
            .sub_capabilities
            .iter()
            .map(|sub| sub_capability_card(capability, sub))
            .collect::<Vec<_>>(),
    })
}

#[must_use]
pub fn sub_capability_payload(
    found: &SubCapabilityRef<'_>,
    neighbors: &SubCapabilityNeighbors<'_>,
) -> Value {
    let capability = found.capability;
    let sub = found.sub_capability;
    json!({
        "category": {
            "slug": found.category.slug,
            "name": found.category.name,
            "href": found.category.href(),
        },
        "capability": {
            "slug": capability.slug,
            "name": capability.name,
            "href": capability.href(),
        },
        "slug": sub.slug,
        "name": sub.name,
        "benefit": sub.benefit,
        "outcome": sub.outcome,
        "outputs": sub.outputs,
        "assessment": sub.assessment,
        "videos": sub.videos,
        "workbook": sub.workbook,
        "templates": sub.templates,
        "plan_30_days": sub.plan_30_days,
        "href": sub.href(&capability.slug),
        "navigation": {
            "position": neighbors.position + 1,
            "total": neighbors.total,
            "prev": neighbors.prev.map(|p| sub_capability_card(capability, p)),
            "next": neighbors.next.map(|n| sub_capability_card(capability, n)),
        },
    })
}

/// Route enumeration for the static site generator, in authored order.
#[must_use]
pub fn routes_payload(catalog: &Catalog) -> Value {
    let mut categories = Vec::new();
    let mut capabilities = Vec::new();
    let mut sub_capabilities = Vec::new();
    for category in &catalog.categories {
        categories.push(category.href());
        for capability in &category.capabilities {
            capabilities.push(capability.href());
            for sub in &capability.sub_capabilities {
                sub_capabilities.push(sub.href(&capability.slug));
            }
        }
    }
    json!({
        "categories": categories,
        "capabilities": capabilities,
        "sub_capabilities": sub_capabilities,
    })
}

#[must_use]
pub fn keywords_payload(keywords: &[&str]) -> Value {
    json!({ "keywords": keywords })
}

#[must_use]
pub fn search_payload(query: &str, results: &[SearchResult]) -> Value {
    json!({
        "query": query,
        "count": results.len(),
        "results": results,
    })
}

#[must_use]
pub fn score_payload(breakdown: &ScoreBreakdown) -> Value {
    json!({
        "level": breakdown.level,
        "description": breakdown.level.description(),
        "points": breakdown.points,
        "max_points": breakdown.max_points,
        "percentage": breakdown.percentage(),
        "next_step": aljude_academy_assess::next_step_hint(),
    })
}

#[must_use]
pub fn version_payload(crate_version: &str) -> Value {
    json!({
        "api_version": API_VERSION,
        "crate_version": crate_version,
    })
}

#[must_use]
pub fn openapi_v1_spec() -> Value {
    json!({
      "openapi": "3.0.3",
      "info": {
        "title": "aljude-academy API",
        "version": API_VERSION
      },
      "paths": {
        "/healthz": {"get": {"responses": {"200": {"description": "ok"}}}},
        "/readyz": {"get": {"responses": {"200": {"description": "ready"}, "503": {"description": "not ready"}}}},
        "/metrics": {"get": {"responses": {"200": {"description": "plain-text counters"}}}},
        "/v1/version": {"get": {"responses": {"200": {"description": "api and crate version"}}}},
        "/v1/openapi.json": {"get": {"responses": {"200": {"description": "this document"}, "304": {"description": "not modified"}}}},
        "/v1/categories": {
          "get": {"responses": {"200": {"description": "category summaries"}, "304": {"description": "not modified"}}}
        },
        "/v1/categories/{slug}": {
          "get": {
            "parameters": [
              {"name": "slug", "in": "path", "required": true, "schema": {"type": "string"}}
            ],
            "responses": {
              "200": {"description": "category page payload"},
              "304": {"description": "not modified"},
              "404": {"description": "unknown category slug", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}}
            }
          }
        },
        "/v1/capabilities/{cap}": {
          "get": {
            "parameters": [
              {"name": "cap", "in": "path", "required": true, "schema": {"type": "string"}}
            ],
            "responses": {
              "200": {"description": "capability page payload"},
              "304": {"description": "not modified"},
              "404": {"description": "unknown capability slug", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}}
            }
          }
        },
        "/v1/capabilities/{cap}/{sub}": {
          "get": {
            "parameters": [
              {"name": "cap", "in": "path", "required": true, "schema": {"type": "string"}},
              {"name": "sub", "in": "path", "required": true, "schema": {"type": "string"}}
            ],
            "responses": {
              "200": {"description": "sub-capability page payload"},
              "304": {"description": "not modified"},
              "404": {"description": "unknown slug pair", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}}
            }
          }
        },
        "/v1/search": {
          "get": {
            "parameters": [
              {"name": "q", "in": "query", "required": true, "schema": {"type": "string"}}
            ],
            "responses": {
              "200": {"description": "ordered search results"},
              "400": {"description": "missing q", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}}
            }
          }
        },
        "/v1/routes": {
          "get": {"responses": {"200": {"description": "pre-renderable route hrefs"}, "304": {"description": "not modified"}}}
        },
        "/v1/keywords": {
          "get": {"responses": {"200": {"description": "suggested search prompts"}, "304": {"description": "not modified"}}}
        },
        "/v1/assessments/{cap}/{sub}/score": {
          "post": {
            "parameters": [
              {"name": "cap", "in": "path", "required": true, "schema": {"type": "string"}},
              {"name": "sub", "in": "path", "required": true, "schema": {"type": "string"}}
            ],
            "requestBody": {
              "required": true,
              "content": {
                "application/json": {
                  "schema": {
                    "type": "object",
                    "required": ["answers"],
                    "additionalProperties": false,
                    "properties": {
                      "answers": {
                        "type": "object",
                        "additionalProperties": {"type": "string", "enum": ["not", "partial", "full"]}
                      }
                    }
                  }
                }
              }
            },
            "responses": {
              "200": {"description": "maturity level and score breakdown"},
              "400": {"description": "incomplete or unknown answers", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}},
              "404": {"description": "unknown slug pair", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}}
            }
          }
        }
      },
      "components": {
        "schemas": {
          "ApiErrorCode": {
            "type": "string",
            "enum": [
              "invalid_query_parameter",
              "missing_query_parameter",
              "not_found",
              "invalid_request_body",
              "incomplete_assessment",
              "unknown_question",
              "internal"
            ]
          },
          "ApiError": {
            "type": "object",
            "required": ["code", "message", "details"],
            "additionalProperties": false,
            "properties": {
              "code": {"$ref": "#/components/schemas/ApiErrorCode"},
              "message": {"type": "string"},
              "details": {"type": "object"}
            }
          }
        }
      }
    })
}

#[cfg(test)]
mod tests {
    use super::params::parse_search_query;
    use super::*;
    use aljude_academy_catalog::catalog;
    use aljude_academy_query::{find_capability, find_sub_capability, sub_capability_neighbors};

    #[test]
    fn search_query_param_required_but_may_be_blank() {
        let mut q = BTreeMap::new();
        let err = parse_search_query(&q).expect_err("q is required");
        assert_eq!(err.code, ApiErrorCode::MissingQueryParameter);

        q.insert("q".to_string(), "   ".to_string());
        assert_eq!(parse_search_query(&q).expect("blank q is valid"), "   ");
    }

    #[test]
    fn error_codes_map_to_expected_statuses() {
        assert_eq!(ApiErrorCode::NotFound.http_status(), 404);
        assert_eq!(ApiErrorCode::IncompleteAssessment.http_status(), 400);
        assert_eq!(ApiErrorCode::Internal.http_status(), 500);
    }

    #[test]
    fn error_envelope_wire_shape_is_stable() {
        let err = ApiError::sub_capability_not_found("nope", "9");
        let raw = serde_json::to_value(&err).expect("serialize error");
        assert_eq!(raw["code"], "not_found");
        assert_eq!(raw["details"]["capability_slug"], "nope");
        assert_eq!(raw["details"]["sub_slug"], "9");
    }

    #[test]
    fn score_request_rejects_unknown_and_missing_ids() {
        let found = find_sub_capability(catalog(), "financial-management-budgeting", "1")
            .expect("authored sub");
        let assessment = &found.sub_capability.assessment;

        let mut answers = BTreeMap::new();
        answers.insert("q99".to_string(), AnswerLevel::FullyInPlace);
        let err = validate_score_request(&ScoreRequest { answers }, assessment)
            .expect_err("unknown id rejected");
        assert_eq!(err.code, ApiErrorCode::UnknownQuestion);

        let mut answers = BTreeMap::new();
        answers.insert("q1".to_string(), AnswerLevel::FullyInPlace);
        let err = validate_score_request(&ScoreRequest { answers }, assessment)
            .expect_err("partial set rejected");
        assert_eq!(err.code, ApiErrorCode::IncompleteAssessment);

        let answers = assessment
            .questions
            .iter()
            .map(|q| (q.id.clone(), AnswerLevel::PartiallyInPlace))
            .collect();
        validate_score_request(&ScoreRequest { answers }, assessment).expect("complete set passes");
    }

    #[test]
    fn category_payload_carries_capability_cards() {
        let category = catalog()
            .categories
            .iter()
            .find(|c| c.slug.as_str() == "financial-management")
            .expect("authored category");
        let payload = category_payload(category);
        assert_eq!(payload["slug"], "financial-management");
        assert_eq!(payload["href"], "/categories/financial-management");
        let cards = payload["capabilities"].as_array().expect("cards array");
        assert_eq!(cards.len(), category.capabilities.len());
        assert_eq!(cards[0]["sub_capability_count"], 5);
    }

    #[test]
    fn sub_capability_payload_navigation_is_one_based() {
        let found = find_sub_capability(catalog(), "financial-management-budgeting", "3")
            .expect("authored sub");
        let neighbors =
            sub_capability_neighbors(found.capability, "3").expect("neighbors for known sub");
        let payload = sub_capability_payload(&found, &neighbors);
        assert_eq!(payload["name"], "Map your expenses by programme");
        assert_eq!(payload["navigation"]["position"], 3);
        assert_eq!(payload["navigation"]["total"], 5);
        assert_eq!(
            payload["navigation"]["prev"]["href"],
            "/capabilities/financial-management-budgeting/2"
        );
        assert_eq!(
            payload["navigation"]["next"]["href"],
            "/capabilities/financial-management-budgeting/4"
        );
    }

    #[test]
    fn routes_payload_enumerates_every_page() {
        let payload = routes_payload(catalog());
        assert_eq!(payload["categories"].as_array().map(Vec::len), Some(8));
        assert_eq!(payload["capabilities"].as_array().map(Vec::len), Some(37));
        assert_eq!(
            payload["sub_capabilities"].as_array().map(Vec::len),
            Some(185)
        );
    }

    #[test]
    fn capability_payload_includes_breadcrumb_context() {
        let found =
            find_capability(catalog(), "financial-management-budgeting").expect("authored cap");
        let payload = capability_payload(&found);
        assert_eq!(payload["category"]["slug"], "financial-management");
        assert_eq!(payload["outcomes"].as_array().map(Vec::len), Some(3));
        assert_eq!(payload["sub_capabilities"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn openapi_document_lists_every_route() {
        let spec = openapi_v1_spec();
        let paths = spec["paths"].as_object().expect("paths object");
        for route in [
            "/healthz",
            "/readyz",
            "/metrics",
            "/v1/version",
            "/v1/openapi.json",
            "/v1/categories",
            "/v1/categories/{slug}",
            "/v1/capabilities/{cap}",
            "/v1/capabilities/{cap}/{sub}",
            "/v1/search",
            "/v1/routes",
            "/v1/keywords",
            "/v1/assessments/{cap}/{sub}/score",
        ] {
            assert!(paths.contains_key(route), "missing openapi path: {route}");
        }
    }

    #[test]
    fn score_payload_reports_exact_percentage() {
        let answers: BTreeMap<String, AnswerLevel> = (1..=5)
            .map(|n| (format!("q{n}"), AnswerLevel::FullyInPlace))
            .collect();
        let breakdown = aljude_academy_assess::score_answers(&answers, 5);
        let payload = score_payload(&breakdown);
        assert_eq!(payload["level"], "A");
        assert_eq!(payload["points"], 10);
        assert_eq!(payload["max_points"], 10);
        assert_eq!(payload["percentage"], 1.0);
        assert_eq!(payload["next_step"], "Start with Video 1, then open the workbook.");
    }
}
