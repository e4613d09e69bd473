use crate::domain::DomainError;
use crate::store::RecordId;
use crate::view::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ProductCommand {
    SetCode(String),
    SetName(String),
    SetQuantity(u32),
    SetPackaging(String),
    SetPrice(f64),
    Submit,
    Remove(RecordId),
}

/// Blank numeric inputs read as zero, like a cleared number field
fn parse_quantity(value: &str) -> Result<u32, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let invalid = || DomainError::InvalidNumber {
        field: "quantity",
        value: value.to_string(),
    };
    let parsed: i64 = trimmed.parse().map_err(|_| invalid())?;
    if parsed < 0 {
        return Err(DomainError::NegativeValue { field: "quantity" });
    }
    u32::try_from(parsed).map_err(|_| invalid())
}

fn parse_price(value: &str) -> Result<f64, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let price: f64 = trimmed
        .parse()
        .ok()
        .filter(|price: &f64| price.is_finite())
        .ok_or_else(|| DomainError::InvalidDecimal {
            field: "price",
            value: value.to_string(),
        })?;
    if price < 0.0 {
        return Err(DomainError::NegativeValue { field: "price" });
    }
    // "-0" parses to negative zero
    Ok(price.abs())
}

impl TryFrom<Intent> for ProductCommand {
    type Error = DomainError;

    fn try_from(intent: Intent) -> Result<Self, Self::Error> {
        match intent {
            Intent::SetField { field, value } => match field.as_str() {
                "code" => Ok(Self::SetCode(value)),
                "name" => Ok(Self::SetName(value)),
                "quantity" => Ok(Self::SetQuantity(parse_quantity(&value)?)),
                "packaging" => Ok(Self::SetPackaging(value)),
                "price" => Ok(Self::SetPrice(parse_price(&value)?)),
                _ => Err(DomainError::UnknownField {
                    view: "inventory",
                    field,
                }),
            },
            Intent::Submit => Ok(Self::Submit),
            Intent::Remove(id) => Ok(Self::Remove(id)),
            other => Err(DomainError::Unsupported {
                view: "inventory",
                action: other.action(),
            }),
        }
    }
}
