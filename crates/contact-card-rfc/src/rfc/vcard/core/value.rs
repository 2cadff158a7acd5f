//! Property value types (RFC 6350 §4, RFC 7095 §3.5).

/// Declared value type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    #[default]
    Text,
    Uri,
    Date,
    Time,
    DateTime,
    DateAndOrTime,
    Integer,
    Boolean,
    Float,
}

impl ValueType {
    /// Parses from the jCard value-type tag.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(Self::Text),
            "uri" => Some(Self::Uri),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "date-time" => Some(Self::DateTime),
            "date-and-or-time" => Some(Self::DateAndOrTime),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            "float" => Some(Self::Float),
            _ => None,
        }
    }

    /// Returns the jCard value-type tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Uri => "uri",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date-time",
            Self::DateAndOrTime => "date-and-or-time",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Float => "float",
        }
    }
}

impl core::str::FromStr for ValueType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}

/// One component of a structured value.
///
/// A component with a single string is written bare, several strings are
/// written as a nested array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Single(String),
    Multi(Vec<String>),
}

impl Component {
    /// Builds a component from its values; an empty list becomes `""`.
    ///
    /// A lone empty value stays an array (`[""]`) so that it does not read
    /// back as an empty list.
    #[must_use]
    pub fn from_values(values: &[String]) -> Self {
        match values {
            [] => Self::Single(String::new()),
            [single] if single.is_empty() => Self::Multi(vec![String::new()]),
            [single] => Self::Single(single.clone()),
            _ => Self::Multi(values.to_vec()),
        }
    }
}

/// The value element of a property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Float(f64),
    /// A flat list of strings.
    List(Vec<String>),
    /// Ordered components, each one or more strings.
    Structured(Vec<Component>),
}

impl PropertyValue {
    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an integer if applicable.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a boolean if applicable.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as a float if applicable.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the value as a flat list if applicable.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_tags() {
        assert_eq!(ValueType::parse("date-and-or-time"), Some(ValueType::DateAndOrTime));
        assert_eq!(ValueType::parse("DATE"), None);
        assert_eq!(ValueType::Uri.as_str(), "uri");
        assert_eq!("float".parse::<ValueType>(), Ok(ValueType::Float));
    }

    #[test]
    fn component_from_values() {
        assert_eq!(Component::from_values(&[]), Component::Single(String::new()));
        assert_eq!(
            Component::from_values(&["Dr.".to_string()]),
            Component::Single("Dr.".to_string())
        );
        assert_eq!(
            Component::from_values(&["Philip".to_string(), "Paul".to_string()]),
            Component::Multi(vec!["Philip".to_string(), "Paul".to_string()])
        );
        assert_eq!(
            Component::from_values(&[String::new()]),
            Component::Multi(vec![String::new()])
        );
    }

    #[test]
    fn value_accessors() {
        let val: PropertyValue = "foo".into();
        assert_eq!(val.as_text(), Some("foo"));
        assert_eq!(val.as_integer(), None);
        assert_eq!(PropertyValue::from(7_i64).as_integer(), Some(7));
        assert_eq!(PropertyValue::from(true).as_bool(), Some(true));
    }
}
