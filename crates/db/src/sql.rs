//! Lowering of policy conditions into SQL.
//!
//! The policy engine returns backend-agnostic [`Condition`] trees; this
//! module translates them into parameterized `WHERE` fragments on a sqlx
//! [`QueryBuilder`]. Values are always bound, never interpolated.

use sqlx::{Postgres, QueryBuilder};
use ypsl_core::policy::{Access, Condition, Field, Value};

/// Map a policy field to its column name. Every scoped table uses these
/// exact column names, which is what keeps the engine backend-agnostic.
pub fn column(field: Field) -> &'static str {
    match field {
        Field::Id => "id",
        Field::Project => "project",
        Field::Status => "status",
        Field::Role => "role",
        Field::Category => "category",
    }
}

fn push_value(qb: &mut QueryBuilder<'_, Postgres>, value: &Value) {
    match value {
        Value::Str(s) => {
            qb.push_bind(s.clone());
        }
        Value::Id(id) => {
            qb.push_bind(*id);
        }
    }
}

/// Append a parenthesized SQL rendering of `condition` to the builder.
pub fn push_condition(qb: &mut QueryBuilder<'_, Postgres>, condition: &Condition) {
    match condition {
        Condition::Eq(field, value) => {
            qb.push("(");
            qb.push(column(*field));
            qb.push(" = ");
            push_value(qb, value);
            qb.push(")");
        }
        Condition::NotIn(field, values) => {
            // NULL passes a not_in filter: an unset field is not a match.
            let col = column(*field);
            qb.push("(");
            qb.push(col);
            qb.push(" IS NULL OR ");
            qb.push(col);
            qb.push(" NOT IN (");
            let mut first = true;
            for value in values {
                if !first {
                    qb.push(", ");
                }
                push_value(qb, value);
                first = false;
            }
            qb.push("))");
        }
        Condition::And(parts) => push_joined(qb, parts, " AND "),
        Condition::Or(parts) => push_joined(qb, parts, " OR "),
    }
}

fn push_joined(qb: &mut QueryBuilder<'_, Postgres>, parts: &[Condition], joiner: &str) {
    if parts.is_empty() {
        // An empty conjunction/disjunction scopes to nothing.
        qb.push("(FALSE)");
        return;
    }
    qb.push("(");
    let mut first = true;
    for part in parts {
        if !first {
            qb.push(joiner);
        }
        push_condition(qb, part);
        first = false;
    }
    qb.push(")");
}

/// Append ` AND (<condition>)` for a scoped decision; nothing for `Allow`.
///
/// Callers must short-circuit `Deny` before building the query; pushing a
/// denied access is a logic error and scopes the statement to no rows.
pub fn push_access(qb: &mut QueryBuilder<'_, Postgres>, access: &Access) {
    match access {
        Access::Allow => {}
        Access::Deny => {
            qb.push(" AND (FALSE)");
        }
        Access::Where(condition) => {
            qb.push(" AND ");
            push_condition(qb, condition);
        }
    }
}

/// Append `, col = COALESCE($n, col)` with the bound optional value.
///
/// Shared by the partial-update repositories: a `None` leaves the column
/// untouched.
pub fn push_coalesce<'a, T>(
    qb: &mut QueryBuilder<'a, Postgres>,
    col: &str,
    value: Option<T>,
) where
    T: 'a + Send + sqlx::Encode<'a, Postgres> + sqlx::Type<Postgres>,
{
    qb.push(format!(", {col} = COALESCE("));
    qb.push_bind(value);
    qb.push(format!(", {col})"));
}
