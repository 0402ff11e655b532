use serde::{Deserialize, Serialize};

/// The structured answer collected on the contact step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
}

impl ContactInfo {
    /// Create a contact record from both fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Read one field.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
        }
    }

    /// Return a fresh record with `field` replaced and the other field kept.
    pub fn with_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        let mut updated = self.clone();
        match field {
            ContactField::Name => updated.name = value.into(),
            ContactField::Email => updated.email = value.into(),
        }
        updated
    }
}

/// One of the two inputs on the contact step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
}

impl ContactField {
    /// Both fields, in display order.
    pub const ALL: [ContactField; 2] = [ContactField::Name, ContactField::Email];

    /// The other field. Used for Tab focus cycling.
    pub fn other(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Name,
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_keeps_the_other_field() {
        let contact = ContactInfo::new("Ada", "ada@hogpulse.com");

        let renamed = contact.with_field(ContactField::Name, "Grace");
        assert_eq!(renamed, ContactInfo::new("Grace", "ada@hogpulse.com"));

        let rehomed = contact.with_field(ContactField::Email, "ada@example.org");
        assert_eq!(rehomed, ContactInfo::new("Ada", "ada@example.org"));

        // The source record is untouched.
        assert_eq!(contact.name, "Ada");
    }

    #[test]
    fn other_field_cycles() {
        assert_eq!(ContactField::Name.other(), ContactField::Email);
        assert_eq!(ContactField::Email.other().other(), ContactField::Email);
    }
}
