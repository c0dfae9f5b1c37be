use std::any::Any;

/// Result union of a wrapped formatter.
///
/// Exactly two cases are accepted downstream:
///
/// - `Text`  → encoding already resolved, safe for direct output
/// - `Bytes` → raw bytes under some unspecified encoding
///
/// `Opaque` exists so results of any other runtime type are representable
/// and rejectable. Normalization never accepts it.
pub enum FormatterOutput {
    Text(String),
    Bytes(Vec<u8>),
    Opaque {
        /// Runtime type name captured at construction, used in the
        /// rejection error.
        type_name: &'static str,
        value: Box<dyn Any + Send>,
    },
}

impl FormatterOutput {
    /// Wrap a value of any other runtime type, recording its type name.
    pub fn opaque<T: Any + Send>(value: T) -> Self {
        FormatterOutput::Opaque {
            type_name: std::any::type_name::<T>(),
            value: Box::new(value),
        }
    }
}

impl std::fmt::Debug for FormatterOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatterOutput::Text(s) => f.debug_tuple("Text").field(s).finish(),
            FormatterOutput::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            FormatterOutput::Opaque { type_name, .. } => f
                .debug_struct("Opaque")
                .field("type_name", type_name)
                .finish(),
        }
    }
}

impl From<String> for FormatterOutput {
    fn from(s: String) -> Self {
        FormatterOutput::Text(s)
    }
}

impl From<&str> for FormatterOutput {
    fn from(s: &str) -> Self {
        FormatterOutput::Text(s.to_string())
    }
}

impl From<Vec<u8>> for FormatterOutput {
    fn from(b: Vec<u8>) -> Self {
        FormatterOutput::Bytes(b)
    }
}

impl From<&[u8]> for FormatterOutput {
    fn from(b: &[u8]) -> Self {
        FormatterOutput::Bytes(b.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_records_the_runtime_type_name() {
        let out = FormatterOutput::opaque(42_i64);
        match out {
            FormatterOutput::Opaque { type_name, .. } => assert_eq!(type_name, "i64"),
            other => panic!("expected opaque, got {other:?}"),
        }
    }

    #[test]
    fn opaque_keeps_the_wrapped_value() {
        let out = FormatterOutput::opaque(vec![1.0_f64, 2.0]);
        match out {
            FormatterOutput::Opaque { value, .. } => {
                let floats = value.downcast_ref::<Vec<f64>>().unwrap();
                assert_eq!(floats.len(), 2);
            }
            other => panic!("expected opaque, got {other:?}"),
        }
    }

    #[test]
    fn conversions_pick_the_matching_case() {
        assert!(matches!(
            FormatterOutput::from("warning"),
            FormatterOutput::Text(_)
        ));
        assert!(matches!(
            FormatterOutput::from(b"warning".as_slice()),
            FormatterOutput::Bytes(_)
        ));
    }

    #[test]
    fn debug_omits_the_opaque_payload() {
        let rendered = format!("{:?}", FormatterOutput::opaque(3_u8));
        assert!(rendered.contains("u8"));
        assert!(!rendered.contains('3'));
    }
}
