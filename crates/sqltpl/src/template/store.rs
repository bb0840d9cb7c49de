use crate::error::{QueryError, QueryResult};
use crate::value::SqlValue;

/// A named parameter held by a [`QueryTemplate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    value: SqlValue,
}

impl Parameter {
    /// The parameter name as given at insertion time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter value.
    pub fn value(&self) -> &SqlValue {
        &self.value
    }

    /// The placeholder token this parameter substitutes: `{name}`.
    pub fn token(&self) -> String {
        format!("{{{}}}", self.name)
    }
}

/// Template store: an immutable template string plus ordered named parameters.
///
/// `QueryTemplate` is a plain value with no internal synchronization. Adding
/// parameters needs `&mut`, so sharing one instance across threads requires
/// external synchronization for mutation; [`build`](QueryTemplate::build)
/// takes `&self` and never mutates the store.
#[must_use]
#[derive(Debug, Clone)]
pub struct QueryTemplate {
    template: String,
    params: Vec<Parameter>,
}

impl QueryTemplate {
    /// Create a store from a template string.
    ///
    /// The template must contain at least one non-whitespace character.
    pub fn new(template: impl Into<String>) -> QueryResult<Self> {
        let template = template.into();
        if template.trim().is_empty() {
            return Err(QueryError::EmptyTemplate);
        }
        Ok(Self {
            template,
            params: Vec::new(),
        })
    }

    /// Append a named parameter.
    ///
    /// The name must be non-empty after trimming and is stored as given (the
    /// placeholder token is built from the untrimmed name). The value may be
    /// [`SqlValue::Null`]. On error nothing is appended.
    ///
    /// Returns `&mut Self` so calls chain with `?`:
    ///
    /// ```ignore
    /// let mut q = sqltpl::template("SELECT {a}, {b}")?;
    /// q.add_parameter("a", 1_i64)?.add_parameter("b", "x")?;
    /// ```
    pub fn add_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<SqlValue>,
    ) -> QueryResult<&mut Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(QueryError::InvalidParameterName);
        }
        self.params.push(Parameter {
            name,
            value: value.into(),
        });
        Ok(self)
    }

    /// Append a named parameter and return `self`.
    ///
    /// This is the consuming counterpart of
    /// [`add_parameter`](QueryTemplate::add_parameter), convenient for
    /// chaining on temporary values.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<SqlValue>) -> QueryResult<Self> {
        self.add_parameter(name, value)?;
        Ok(self)
    }

    /// The raw template string.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Read-only view of the parameters in insertion order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    /// Render the query by substituting every placeholder with its
    /// parameter's literal.
    ///
    /// Validates that the number of well-formed `{name}` tokens in the
    /// template equals the number of parameters, then substitutes parameters
    /// in insertion order; each parameter replaces **all** occurrences of its
    /// token. Any validation failure is returned as
    /// [`QueryError::BuildFailed`] wrapping the specific cause.
    ///
    /// The store is not modified; repeated calls return the same result.
    ///
    /// **Warning**: substitution is sequential over the working buffer. A
    /// formatted literal that happens to contain a later parameter's token is
    /// itself subject to that later replacement.
    pub fn build(&self) -> QueryResult<String> {
        let query = self.substitute().map_err(QueryError::build_failed)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(params = self.params.len(), len = query.len(), "built query");

        Ok(query)
    }

    fn substitute(&self) -> QueryResult<String> {
        let expected = count_placeholders(&self.template);
        if self.params.len() != expected {
            return Err(QueryError::ParameterCountMismatch {
                expected,
                found: self.params.len(),
            });
        }

        let mut out = self.template.clone();
        for param in &self.params {
            let token = param.token();
            if !out.contains(&token) {
                return Err(QueryError::PlaceholderNotFound { token });
            }
            out = out.replace(&token, &param.value().to_literal());
        }
        Ok(out)
    }
}

/// Count well-formed placeholder tokens in a template.
///
/// A token is `{`, a name that is non-empty after trimming and contains no
/// brace, then `}`. A `{` that never closes (or closes immediately) is plain
/// template text; a nested `{` restarts the scan from itself.
fn count_placeholders(template: &str) -> usize {
    let mut count = 0;
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        rest = &rest[open + 1..];
        match rest.find(['{', '}']) {
            Some(pos) if rest.as_bytes()[pos] == b'}' => {
                if !rest[..pos].trim().is_empty() {
                    count += 1;
                }
                rest = &rest[pos + 1..];
            }
            Some(pos) => rest = &rest[pos..],
            None => break,
        }
    }
    count
}
