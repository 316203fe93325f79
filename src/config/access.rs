use super::*;

impl CdclConfig {
    /// Get a typed value from the configuration using dot notation.
    ///
    /// # Examples
    /// ```no_run
    /// # use cdcl::CdclConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = CdclConfig::from_file("server.cdcl")?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, CdclError>
    where
        T: TryFrom<Value, Error = CdclError>,
    {
        let value = self.get_value(path)?.clone();
        T::try_from(value).map_err(|e| self.enhance_error_with_line_info(e, path))
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, CdclError>
    where
        T: TryFrom<Value, Error = CdclError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(CdclError::PathNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = CdclError>,
    {
        self.get(path).unwrap_or(default)
    }

    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }

    /// Borrow the raw `Value` at a dot path.
    pub fn get_value(&self, path: &str) -> Result<&Value, CdclError> {
        let mut segments = path.split('.');
        let first = segments.next().filter(|s| !s.trim().is_empty());

        let mut current = first
            .and_then(|seg| self.root.get(seg))
            .ok_or_else(|| self.not_found(path))?;

        for seg in segments {
            current = current
                .as_table()
                .and_then(|t| t.get(seg))
                .ok_or_else(|| self.not_found(path))?;
        }

        Ok(current)
    }

    /// Keys of the table at `path`, in source order. An empty path lists
    /// the root.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, CdclError> {
        let table = if path.trim().is_empty() {
            &self.root
        } else {
            let value = self.get_value(path)?;
            value.as_table().ok_or_else(|| CdclError::TypeError {
                message: format!("`{}` is {}, not a table", path, value.type_name()),
                hint: None,
                code: Some(403),
            })?
        };
        Ok(table.keys().cloned().collect())
    }

    fn not_found(&self, path: &str) -> CdclError {
        let (line, snippet) = helpers::find_config_line(path, &self.raw_content);
        let hint = if line > 0 {
            format!("Closest match at line {}: {}", line, snippet)
        } else {
            "Check that the path exists in your config file".to_string()
        };
        CdclError::PathNotFound {
            path: path.to_string(),
            hint: Some(hint),
            code: Some(304),
        }
    }

    fn enhance_error_with_line_info(&self, error: CdclError, path: &str) -> CdclError {
        match error {
            CdclError::TypeError { message, code, .. } => {
                let (line, snippet) = helpers::find_config_line(path, &self.raw_content);
                CdclError::TypeError {
                    message: format!("`{}`: {}", path, message),
                    hint: Some(format!("Defined at line {}: {}", line, snippet)),
                    code,
                }
            }
            other => other,
        }
    }
}
