use std::fmt;

/// One input of a view's draft form
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

impl FormField {
    pub fn new(name: &'static str, placeholder: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            placeholder,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub fields: Vec<FormField>,
    pub submit_label: &'static str,
}

impl Form {
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            writeln!(f, "  {} ({}): {}", field.name, field.placeholder, field.value)?;
        }
        writeln!(f, "  [{}]", self.submit_label)
    }
}
