//! Registration form fields and their values

use super::errors::ErrorKey;

/// How a field is edited and drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Free text input that renders masked unless revealed
    Secret,
    /// Choice from a list of options, empty meaning "nothing selected"
    Select,
}

/// One named input of the registration form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    PhoneCode,
    PhoneNumber,
    Country,
    City,
    Pan,
    Aadhar,
}

impl Field {
    /// Every field, in form and payload order
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::PhoneCode,
        Field::PhoneNumber,
        Field::Country,
        Field::City,
        Field::Pan,
        Field::Aadhar,
    ];

    /// Key used in the submission payload
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::PhoneCode => "phoneCode",
            Self::PhoneNumber => "phoneNumber",
            Self::Country => "country",
            Self::City => "city",
            Self::Pan => "pan",
            Self::Aadhar => "aadhar",
        }
    }

    /// Placeholder shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "E-mail",
            Self::Password => "Password",
            Self::PhoneCode => "Code",
            Self::PhoneNumber => "Phone Number",
            Self::Country => "Select Country",
            Self::City => "Select City",
            Self::Pan => "PAN Number",
            Self::Aadhar => "Aadhar Number",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Password => FieldKind::Secret,
            Self::Country | Self::City => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }

    /// Error slot this field reports into. The phone pair shares one.
    pub fn error_key(&self) -> ErrorKey {
        match self {
            Self::FirstName => ErrorKey::FirstName,
            Self::LastName => ErrorKey::LastName,
            Self::Username => ErrorKey::Username,
            Self::Email => ErrorKey::Email,
            Self::Password => ErrorKey::Password,
            Self::PhoneCode | Self::PhoneNumber => ErrorKey::Phone,
            Self::Country => ErrorKey::Country,
            Self::City => ErrorKey::City,
            Self::Pan => ErrorKey::Pan,
            Self::Aadhar => ErrorKey::Aadhar,
        }
    }

    /// Position of this field in [`Field::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Current values of all registration fields. Every value starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: [String; 11],
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Copy of these values with `field` replaced by `value`
    #[cfg(test)]
    pub fn with(&self, field: Field, value: &str) -> Self {
        let mut updated = self.clone();
        updated.set(field, value);
        updated
    }

    /// Values paired with their field, in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .iter()
            .map(move |field| (*field, self.get(*field)))
    }
}
