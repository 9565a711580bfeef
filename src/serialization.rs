use crate::{Confidence, NameValidation, Script};
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Confidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Empty optional fields are omitted from the output.
impl Serialize for NameValidation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NameValidation", 11)?;

        state.serialize_field("original", self.original.as_str())?;
        state.serialize_field("sanitized", self.sanitized.as_str())?;
        state.serialize_field("first_name", self.first_name.as_str())?;
        if self.middle_name.is_empty() {
            state.skip_field("middle_name")?;
        } else {
            state.serialize_field("middle_name", self.middle_name.as_str())?;
        }
        state.serialize_field("last_name", self.last_name.as_str())?;
        if self.honorific.is_empty() {
            state.skip_field("honorific")?;
        } else {
            state.serialize_field("honorific", self.honorific.as_str())?;
        }
        if self.suffix.is_empty() {
            state.skip_field("suffix")?;
        } else {
            state.serialize_field("suffix", self.suffix.as_str())?;
        }
        state.serialize_field("script", &self.script)?;
        state.serialize_field("is_comma_format", &self.is_comma_format)?;
        if self.issues.is_empty() {
            state.skip_field("issues")?;
        } else {
            state.serialize_field("issues", &self.issues)?;
        }
        state.serialize_field("confidence", &self.confidence)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::decompose;

    #[test]
    fn full_record() {
        let v = decompose(Some("Dr. Jane Doe Jr"));
        let json = serde_json::to_value(&v).unwrap();

        assert_eq!("Dr. Jane Doe Jr", json["original"]);
        assert_eq!("Jane", json["first_name"]);
        assert_eq!("Doe", json["last_name"]);
        assert_eq!("Dr", json["honorific"]);
        assert_eq!("JR", json["suffix"]);
        assert_eq!("latin", json["script"]);
        assert_eq!("high", json["confidence"]);
        assert_eq!(false, json["is_comma_format"]);
        assert!(json.get("middle_name").is_none());
        assert!(json.get("issues").is_none());
    }

    #[test]
    fn issues_and_script_strings() {
        let v = decompose(Some("тест"));
        let json = serde_json::to_value(&v).unwrap();

        assert_eq!("cyrillic", json["script"]);
        assert_eq!("medium", json["confidence"]);
        assert_eq!(2, json["issues"].as_array().unwrap().len());
    }
}
