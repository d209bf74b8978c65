use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

use crate::error::{Error, Result};
use crate::utils::date_format;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema,
)]
/// Stored lowercase; `Display` gives the label used in exported reports.
#[serde(rename_all = "lowercase")]
pub enum PersonnelStatus {
    #[default]
    #[strum(to_string = "Active")]
    Active,
    #[strum(to_string = "Inactive")]
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "9b2f6a0e-4c1d-4e43-9a55-2d1f0f3f2c11",
        "name": "Ada Lovelace",
        "email": "ada@company.com",
        "position": "Engineer",
        "department": "Information Technology",
        "phoneNumber": "+905551112233",
        "startDate": "01.01.2024",
        "status": "active"
    })
)]
pub struct Personnel {
    pub id: String,
    pub name: String,
    pub email: String,
    pub position: String,
    /// Department name, not id.
    pub department: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(with = "date_format::date")]
    #[schema(example = "01.01.2024", value_type = String)]
    pub start_date: NaiveDate,
    #[serde(default)]
    pub status: PersonnelStatus,
}

/// Payload for adding a person. Missing text fields arrive blank and are
/// rejected by [`NewPersonnel::validate`].
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPersonnel {
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "ada@company.com", format = "email")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Engineer")]
    pub position: String,
    #[serde(default)]
    #[schema(example = "Information Technology")]
    pub department: String,
    #[serde(default)]
    #[schema(example = "+905551112233", nullable = true)]
    pub phone_number: Option<String>,
    #[serde(default, with = "date_format::option_date")]
    #[schema(example = "01.01.2024", value_type = Option<String>)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: PersonnelStatus,
}

/// Field-level merge: only the fields present are applied.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default, with = "date_format::option_date")]
    #[schema(example = "01.01.2024", value_type = Option<String>)]
    pub start_date: Option<NaiveDate>,
    pub status: Option<PersonnelStatus>,
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

fn normalize_phone(phone: Option<String>) -> Option<String> {
    phone.filter(|p| !p.trim().is_empty())
}

impl NewPersonnel {
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("position", &self.position)?;
        require("department", &self.department)?;
        if self.start_date.is_none() {
            return Err(Error::validation("start date is required"));
        }
        Ok(())
    }

    pub fn into_personnel(self, id: String) -> Result<Personnel> {
        self.validate()?;
        let start_date = self
            .start_date
            .ok_or_else(|| Error::validation("start date is required"))?;

        Ok(Personnel {
            id,
            name: self.name,
            email: self.email,
            position: self.position,
            department: self.department,
            phone_number: normalize_phone(self.phone_number),
            start_date,
            status: self.status,
        })
    }
}

impl PersonnelUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.position.is_none()
            && self.department.is_none()
            && self.phone_number.is_none()
            && self.start_date.is_none()
            && self.status.is_none()
    }

    /// Rejects updates that would blank out a required field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("position", &self.position),
            ("department", &self.department),
        ];
        for (field, value) in required {
            if let Some(v) = value {
                require(field, v)?;
            }
        }
        Ok(())
    }

    pub fn apply(self, person: &mut Personnel) -> Result<()> {
        self.validate()?;

        if let Some(name) = self.name {
            person.name = name;
        }
        if let Some(email) = self.email {
            person.email = email;
        }
        if let Some(position) = self.position {
            person.position = position;
        }
        if let Some(department) = self.department {
            person.department = department;
        }
        if let Some(phone) = self.phone_number {
            person.phone_number = normalize_phone(Some(phone));
        }
        if let Some(start_date) = self.start_date {
            person.start_date = start_date;
        }
        if let Some(status) = self.status {
            person.status = status;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewPersonnel {
        NewPersonnel {
            name: "Ada".into(),
            email: "ada@company.com".into(),
            position: "Engineer".into(),
            department: "Information Technology".into(),
            phone_number: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            status: PersonnelStatus::Active,
        }
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let mut p = sample();
        p.position = "   ".into();
        let err = p.validate().unwrap_err();
        assert!(matches!(err, Error::ValidationFailed(ref m) if m == "position is required"));
    }

    #[test]
    fn missing_start_date_is_rejected() {
        let mut p = sample();
        p.start_date = None;
        assert!(matches!(p.validate(), Err(Error::ValidationFailed(_))));
    }

    #[test]
    fn update_merges_only_present_fields() {
        let mut person = sample().into_personnel("p1".into()).unwrap();
        let update = PersonnelUpdate {
            position: Some("Lead".into()),
            status: Some(PersonnelStatus::Inactive),
            ..Default::default()
        };
        update.apply(&mut person).unwrap();

        assert_eq!(person.position, "Lead");
        assert_eq!(person.status, PersonnelStatus::Inactive);
        assert_eq!(person.name, "Ada");
        assert_eq!(person.email, "ada@company.com");
    }

    #[test]
    fn update_cannot_blank_name() {
        let mut person = sample().into_personnel("p1".into()).unwrap();
        let update = PersonnelUpdate {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(update.apply(&mut person).is_err());
        assert_eq!(person.name, "Ada");
    }

    #[test]
    fn serializes_with_camel_case_and_local_date() {
        let person = sample().into_personnel("p1".into()).unwrap();
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["startDate"], "01.01.2024");
        assert_eq!(json["status"], "active");
        assert!(json["phoneNumber"].is_null());
    }

    #[test]
    fn status_label_differs_from_stored_form() {
        assert_eq!(PersonnelStatus::Active.to_string(), "Active");
        assert_eq!(PersonnelStatus::Inactive.to_string(), "Inactive");

        let stored: PersonnelStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(stored, PersonnelStatus::Inactive);
        assert_eq!(serde_json::to_string(&stored).unwrap(), "\"inactive\"");
    }
}
