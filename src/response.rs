use crate::db::category_repository::CategoryListing;
use crate::error::{ImportError, StoreError, ValidationError};
use crate::models::expense::ExpenseRecord;
use crate::models::filter::ExpenseFilter;
use crate::models::summary::CategoryTotal;
use crate::operations::add::AddOutcome;
use crate::operations::delete::DeleteOutcome;
use crate::operations::update::UpdateOutcome;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Serialize)]
pub struct Added {
    pub status: Status,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub status: Status,
    pub deleted_count: usize,
    pub criteria: ExpenseFilter,
}

#[derive(Debug, Serialize)]
pub struct NotFound {
    pub status: Status,
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct Imported {
    pub status: Status,
    pub imported: usize,
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct Failure {
    pub status: Status,
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Records(Vec<ExpenseRecord>),
    Totals(Vec<CategoryTotal>),
    Categories(CategoryListing),
    Added(Added),
    Deleted(Deleted),
    NotFound(NotFound),
    Imported(Imported),
    Failure(Failure),
}

impl Response {
    pub fn is_failure(&self) -> bool {
        matches!(self, Response::Failure(_))
    }

    pub fn added(result: Result<AddOutcome, StoreError>) -> Self {
        match result {
            Ok(AddOutcome::Added(id)) => Response::Added(Added {
                status: Status::Success,
                id,
            }),
            Ok(AddOutcome::Rejected(err)) => err.into(),
            Err(err) => err.into(),
        }
    }

    pub fn records(result: Result<Vec<ExpenseRecord>, StoreError>) -> Self {
        result.map_or_else(Into::into, Response::Records)
    }

    pub fn totals(result: Result<Vec<CategoryTotal>, StoreError>) -> Self {
        result.map_or_else(Into::into, Response::Totals)
    }

    pub fn updated(result: Result<UpdateOutcome, StoreError>) -> Self {
        match result {
            Ok(UpdateOutcome::Updated(record)) => Response::Records(vec![record]),
            Ok(UpdateOutcome::NotFound { id }) => Response::NotFound(NotFound {
                status: Status::Warning,
                id,
                message: format!("no expense with id {id}"),
            }),
            Ok(UpdateOutcome::Rejected(err)) => err.into(),
            Err(err) => err.into(),
        }
    }

    pub fn deleted(result: Result<DeleteOutcome, StoreError>) -> Self {
        match result {
            Ok(DeleteOutcome::Deleted {
                deleted_count,
                criteria,
            }) => Response::Deleted(Deleted {
                status: if deleted_count > 0 {
                    Status::Success
                } else {
                    Status::Warning
                },
                deleted_count,
                criteria,
            }),
            Ok(DeleteOutcome::Rejected(err)) => err.into(),
            Err(err) => err.into(),
        }
    }

    pub fn imported(result: Result<Vec<i64>, ImportError>) -> Self {
        match result {
            Ok(ids) => Response::Imported(Imported {
                status: Status::Success,
                imported: ids.len(),
                ids,
            }),
            Err(ImportError::Store(err)) => err.into(),
            Err(err) => Response::Failure(Failure {
                status: Status::Error,
                error: "invalid_import",
                message: err.to_string(),
            }),
        }
    }
}

impl From<ValidationError> for Response {
    fn from(err: ValidationError) -> Self {
        Response::Failure(Failure {
            status: Status::Error,
            error: err.kind(),
            message: err.to_string(),
        })
    }
}

impl From<StoreError> for Response {
    fn from(err: StoreError) -> Self {
        tracing::error!("storage fault: {err}");
        Response::Failure(Failure {
            status: Status::Error,
            error: "storage_fault",
            message: err.to_string(),
        })
    }
}

impl From<CategoryListing> for Response {
    fn from(listing: CategoryListing) -> Self {
        Response::Categories(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_added_shape() {
        let value = serde_json::to_value(Response::added(Ok(AddOutcome::Added(3)))).unwrap();
        assert_eq!(value, json!({"status": "success", "id": 3}));
    }

    #[test]
    fn test_invalid_amount_is_a_validation_error() {
        let response = Response::added(Ok(AddOutcome::Rejected(
            ValidationError::InvalidAmount { amount: f64::NAN },
        )));
        assert!(response.is_failure());

        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["error"], "invalid_amount");
    }

    #[test]
    fn test_updated_record_is_a_single_element_array() {
        let record = ExpenseRecord {
            id: 1,
            date: "2024-01-05".to_string(),
            amount: 12.5,
            category: "food".to_string(),
            subcategory: String::new(),
            note: String::new(),
        };
        let value =
            serde_json::to_value(Response::updated(Ok(UpdateOutcome::Updated(record)))).unwrap();

        assert_eq!(
            value,
            json!([{
                "id": 1,
                "date": "2024-01-05",
                "amount": 12.5,
                "category": "food",
                "subcategory": "",
                "note": ""
            }])
        );
    }

    #[test]
    fn test_not_found_is_a_warning() {
        let response = Response::updated(Ok(UpdateOutcome::NotFound { id: 8 }));
        assert!(!response.is_failure());

        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["status"], "warning");
        assert_eq!(value["id"], 8);
    }

    #[test]
    fn test_rejections_name_their_kind() {
        let response = Response::updated(Ok(UpdateOutcome::Rejected(
            ValidationError::NoUpdateFields,
        )));
        assert!(response.is_failure());

        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], "no_update_fields");
    }

    #[test]
    fn test_deleted_echoes_supplied_criteria_only() {
        let criteria = ExpenseFilter {
            category: Some("food".to_string()),
            amount: Some(7.5),
            ..Default::default()
        };
        let value = serde_json::to_value(Response::deleted(Ok(DeleteOutcome::Deleted {
            deleted_count: 2,
            criteria,
        })))
        .unwrap();

        assert_eq!(
            value,
            json!({
                "status": "success",
                "deleted_count": 2,
                "criteria": {"category": "food", "amount": 7.5}
            })
        );
    }

    #[test]
    fn test_nothing_deleted_is_a_warning() {
        let value = serde_json::to_value(Response::deleted(Ok(DeleteOutcome::Deleted {
            deleted_count: 0,
            criteria: ExpenseFilter {
                id: Some(5),
                ..Default::default()
            },
        })))
        .unwrap();

        assert_eq!(value["status"], "warning");
        assert_eq!(value["deleted_count"], 0);
    }

    #[test]
    fn test_storage_fault_shape() {
        let err = StoreError::Database(rusqlite::Error::InvalidQuery);
        let response = Response::records(Err(err));
        assert!(response.is_failure());

        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["error"], "storage_fault");
    }

    #[test]
    fn test_empty_listing_serializes_as_array() {
        let value = serde_json::to_value(Response::records(Ok(Vec::new()))).unwrap();
        assert_eq!(value, json!([]));
    }
}
