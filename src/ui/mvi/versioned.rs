/// A value tagged with a revision number.
///
/// `replace` bumps the revision only when the new value differs, so two
/// snapshots with the same revision are guaranteed equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    value: T,
    version: u64,
}

impl<T: PartialEq> Versioned<T> {
    pub fn initial(value: T) -> Self {
        Self { value, version: 1 }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn replace(self, value: T) -> Self {
        if value == self.value {
            return self;
        }
        Self {
            value,
            version: self.version + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_with_equal_value_keeps_version() {
        let v = Versioned::initial("a".to_string());
        let v = v.replace("a".to_string());
        assert_eq!(v.version(), 1);
    }

    #[test]
    fn replace_with_new_value_bumps_version() {
        let v = Versioned::initial(1).replace(2).replace(3);
        assert_eq!(v.version(), 3);
        assert_eq!(*v.value(), 3);
    }
}
