use crate::error::ValidationError;
use crate::models::filter::{ExpenseChanges, ExpenseFilter};
use rusqlite::types::Value;

/// Conjunction of conditions for a `WHERE` clause.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    conditions: Vec<&'static str>,
    params: Vec<Value>,
}

impl Predicate {
    fn push(&mut self, condition: &'static str, value: Value) {
        self.conditions.push(condition);
        self.params.push(value);
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn to_sql(&self) -> String {
        self.conditions.join(" AND ")
    }
}

/// Assignments for the `SET` part of a partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetClause {
    assignments: Vec<&'static str>,
    params: Vec<Value>,
}

impl SetClause {
    fn push(&mut self, assignment: &'static str, value: Value) {
        self.assignments.push(assignment);
        self.params.push(value);
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn to_sql(&self) -> String {
        self.assignments.join(", ")
    }
}

/// NaN cannot be stored and infinities poison the category sums.
pub fn check_amount(amount: f64) -> Result<f64, ValidationError> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(ValidationError::InvalidAmount { amount })
    }
}

pub fn compile_filter(filter: &ExpenseFilter) -> Result<Predicate, ValidationError> {
    let mut predicate = Predicate::default();

    if let Some(id) = filter.id {
        predicate.push("id = ?", Value::Integer(id));
    }
    if let Some(date) = &filter.date {
        predicate.push("date = ?", Value::Text(date.clone()));
    }
    if let Some(category) = &filter.category {
        predicate.push("category = ?", Value::Text(category.clone()));
    }
    if let Some(subcategory) = &filter.subcategory {
        predicate.push("subcategory = ?", Value::Text(subcategory.clone()));
    }
    if let Some(amount) = filter.amount {
        predicate.push("amount = ?", Value::Real(check_amount(amount)?));
    }
    if let Some(note) = &filter.note {
        predicate.push("note = ?", Value::Text(note.clone()));
    }

    match (&filter.start_date, &filter.end_date) {
        (Some(start), Some(end)) => {
            predicate.conditions.push("date BETWEEN ? AND ?");
            predicate.params.push(Value::Text(start.clone()));
            predicate.params.push(Value::Text(end.clone()));
        }
        (Some(_), None) => {
            return Err(ValidationError::MissingRangeBound { missing: "end_date" });
        }
        (None, Some(_)) => {
            return Err(ValidationError::MissingRangeBound { missing: "start_date" });
        }
        (None, None) => {}
    }

    if predicate.is_empty() {
        return Err(ValidationError::NoFilterCriteria);
    }
    Ok(predicate)
}

pub fn compile_changes(changes: &ExpenseChanges) -> Result<SetClause, ValidationError> {
    let mut clause = SetClause::default();

    if let Some(date) = &changes.date {
        clause.push("date = ?", Value::Text(date.clone()));
    }
    if let Some(amount) = changes.amount {
        clause.push("amount = ?", Value::Real(check_amount(amount)?));
    }
    if let Some(category) = &changes.category {
        clause.push("category = ?", Value::Text(category.clone()));
    }
    if let Some(subcategory) = &changes.subcategory {
        clause.push("subcategory = ?", Value::Text(subcategory.clone()));
    }
    if let Some(note) = &changes.note {
        clause.push("note = ?", Value::Text(note.clone()));
    }

    if clause.assignments.is_empty() {
        return Err(ValidationError::NoUpdateFields);
    }
    Ok(clause)
}
