use thiserror::Error;

///Failures surfaced by the samplers. Numerical degeneracies inside a single
///iteration are recovered in place and never show up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    #[error("dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what : &'static str,
        expected : usize,
        found : usize
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("gave up after {iterations} iterations with {accepted} of {required} candidates accepted")]
    SamplingTimeout {
        iterations : usize,
        accepted : usize,
        required : usize
    }
}

impl SamplerError {
    pub fn invalid<S : Into<String>>(message : S) -> SamplerError {
        SamplerError::InvalidInput(message.into())
    }
}

///Returns a [`SamplerError::DimensionMismatch`] unless `found == expected`.
pub fn check_dimension(what : &'static str, expected : usize, found : usize) -> Result<(), SamplerError> {
    if (expected != found) {
        Result::Err(SamplerError::DimensionMismatch {
            what,
            expected,
            found
        })
    } else {
        Result::Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_dimensions_pass() {
        assert_eq!(check_dimension("b", 3, 3), Result::Ok(()));
    }

    #[test]
    fn mismatch_reports_both_sizes() {
        let err = check_dimension("initial", 4, 2).unwrap_err();
        assert_eq!(err.to_string(), "dimension mismatch for initial: expected 4, found 2");
    }
}
