use write_model::value_object::{ProductId, Quantity};

/// A single parameter that failed validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstraintViolation {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// All parameters of one call that failed validation, in parameter order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstraintViolations(Vec<ConstraintViolation>);

impl ConstraintViolations {
    pub fn new(violations: Vec<ConstraintViolation>) -> Self {
        Self(violations)
    }

    pub fn violations(&self) -> &[ConstraintViolation] {
        &self.0
    }
}

impl std::fmt::Display for ConstraintViolations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConstraintViolations {}

/// Checks the `id` and `quantity` parameters of `operation` without touching any store.
pub(crate) fn validate_id_and_quantity(
    operation: &str,
    id: i64,
    quantity: i64,
) -> Result<(ProductId, Quantity), ConstraintViolations> {
    let mut violations = vec![];
    let id = ProductId::try_from(id).map_err(|e| {
        violations.push(ConstraintViolation {
            path: format!("{}.id", operation),
            message: e.to_string(),
        })
    });
    let quantity = Quantity::try_from(quantity).map_err(|e| {
        violations.push(ConstraintViolation {
            path: format!("{}.quantity", operation),
            message: e.to_string(),
        })
    });
    match (id, quantity) {
        (Ok(id), Ok(quantity)) => Ok((id, quantity)),
        _ => Err(ConstraintViolations(violations)),
    }
}
