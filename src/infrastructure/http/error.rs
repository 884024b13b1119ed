//! Mapping of service failures onto HTTP responses

use axum::http::StatusCode;

use crate::application::ports::outbound::RepoError;
use crate::application::services::ServiceError;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::CharacterId;

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::NameTaken(_) => StatusCode::CONFLICT,
            ServiceError::Domain(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ServiceError::Domain(DomainError::InvalidDiceRoll(_)) => StatusCode::BAD_REQUEST,
            // Well-formed requests the character's current state forbids
            ServiceError::Domain(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Repository(RepoError::NotFound(_)) => StatusCode::NOT_FOUND,
            ServiceError::Repository(RepoError::Conflict(_) | RepoError::Duplicate(_)) => {
                StatusCode::CONFLICT
            }
            ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for (StatusCode, String) {
    fn from(e: ServiceError) -> Self {
        let status = e.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", e);
        }
        (status, e.to_string())
    }
}

pub(crate) fn parse_character_id(id: &str) -> Result<CharacterId, (StatusCode, String)> {
    uuid::Uuid::parse_str(id)
        .map(CharacterId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid character ID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{CurrencyType, EquipmentKind};

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ServiceError::NotFound("Character x".into()), StatusCode::NOT_FOUND),
            (ServiceError::NameTaken("Frodo".into()), StatusCode::CONFLICT),
            (
                DomainError::InvalidCharacterName("F".into()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::InvalidDiceRoll("d7".into()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::TypeMismatch {
                    item: "Torch".into(),
                    expected: EquipmentKind::Weapon,
                    actual: "nothing".into(),
                }
                .into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DomainError::NotEnoughCurrency {
                    currency: CurrencyType::Gold,
                    available: 1,
                    required: 5,
                }
                .into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DomainError::CurrencyOverflow {
                    currency: CurrencyType::Gold,
                }
                .into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                RepoError::NotFound(CharacterId::new()).into(),
                StatusCode::NOT_FOUND,
            ),
            (
                RepoError::Conflict(CharacterId::new()).into(),
                StatusCode::CONFLICT,
            ),
            (
                RepoError::Database("disk full".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{error}");
        }
    }

    #[test]
    fn test_parse_character_id() {
        let id = CharacterId::new();
        assert_eq!(parse_character_id(&id.to_string()).unwrap(), id);

        let (status, _) = parse_character_id("not-a-uuid").unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
