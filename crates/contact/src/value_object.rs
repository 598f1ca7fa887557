use strum::{Display, EnumString, VariantArray};

#[derive(EnumString, Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryType {
    Enquiry,
    #[strum(serialize = "System Request")]
    SystemRequest,
}

/// Form fields, named the way the page names its inputs.
#[derive(Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    QueryType,
    Message,
    Consent,
}

impl Field {
    /// Maps a `ContactFormInput` attribute name to its field.
    pub fn from_attribute(name: &str) -> Option<Self> {
        let field = match name {
            "first_name" => Self::FirstName,
            "last_name" => Self::LastName,
            "email" => Self::Email,
            "query_type" => Self::QueryType,
            "message" => Self::Message,
            "consent" => Self::Consent,
            _ => return None,
        };

        Some(field)
    }
}
