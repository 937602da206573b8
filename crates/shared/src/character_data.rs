//! Character record as stored by the remote character API.
//!
//! ```json
//! {
//!   "attributes": {"Strength": 10, "Dexterity": 10, "Constitution": 10,
//!                  "Intelligence": 10, "Wisdom": 10, "Charisma": 10},
//!   "skillPoints": {"Athletics": 2},
//!   "selectedClass": "Wizard"
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use pointbuy_domain::{AttributeSet, CharacterClass, CharacterSnapshot, SkillInvestment};

/// One saved character, without identity or name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterData {
    pub attributes: AttributeSet,
    /// Missing or `null` decodes as no points
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skill_points: SkillInvestment,
    /// Kept as the raw string so unknown classes don't fail the whole record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_class: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<SkillInvestment, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SkillInvestment>::deserialize(deserializer)?.unwrap_or_default())
}

impl CharacterData {
    /// Convert to a domain snapshot. An unrecognized class becomes no selection.
    pub fn into_snapshot(self) -> CharacterSnapshot {
        let selected_class = self.selected_class.and_then(|raw| {
            match raw.parse::<CharacterClass>() {
                Ok(class) => Some(class),
                Err(e) => {
                    tracing::warn!(
                        selected_class = %raw,
                        error = %e,
                        "Ignoring unknown class in saved character"
                    );
                    None
                }
            }
        });
        CharacterSnapshot {
            attributes: self.attributes,
            skill_points: self.skill_points,
            selected_class,
        }
    }
}

impl From<&CharacterSnapshot> for CharacterData {
    fn from(snapshot: &CharacterSnapshot) -> Self {
        Self {
            attributes: snapshot.attributes,
            skill_points: snapshot.skill_points.clone(),
            selected_class: snapshot.selected_class.map(|c| c.as_str().to_string()),
        }
    }
}

/// Decode a load response body.
///
/// The API may wrap the record in `{"statusCode": .., "body": {..}}`; a
/// non-null `body` is unwrapped, otherwise the value is read as the record
/// itself. A record whose `attributes` field is missing, null, or an empty
/// object means nothing has been saved yet and decodes to `Ok(None)`.
pub fn decode_load_response(value: Value) -> Result<Option<CharacterData>, serde_json::Error> {
    let record = match value {
        Value::Object(mut envelope) => match envelope.remove("body") {
            Some(body) if !body.is_null() => body,
            _ => Value::Object(envelope),
        },
        other => other,
    };

    let has_attributes = match record.get("attributes") {
        None | Some(Value::Null) => false,
        Some(Value::Object(fields)) => !fields.is_empty(),
        Some(_) => true,
    };
    if !has_attributes {
        return Ok(None);
    }

    serde_json::from_value(record).map(Some)
}
