//! Route table and rating form parsing.

use storefront_api::ProductId;
use thiserror::Error;

/// Routes served by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /`: the page.
    Home,
    /// `POST /ratings`: a star click.
    SubmitRating,
    /// Known path, wrong method.
    MethodNotAllowed,
    NotFound,
}

impl Route {
    /// Resolve a request line. Query strings are ignored.
    pub fn resolve(method: &str, path: &str) -> Self {
        let path = path.split('?').next().unwrap_or("");
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match (method.to_ascii_uppercase().as_str(), path) {
            ("GET", "/") | ("HEAD", "/") => Self::Home,
            ("POST", "/ratings") => Self::SubmitRating,
            (_, "/") | (_, "/ratings") => Self::MethodNotAllowed,
            _ => Self::NotFound,
        }
    }
}

/// Why a rating form was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing form field: {0}")]
    MissingField(&'static str),

    #[error("Form field {field} is not an integer: {value}")]
    NotAnInteger { field: &'static str, value: String },

    #[error("Form body is not UTF-8")]
    Encoding,
}

/// A posted star click. The rating is range-checked later by the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingForm {
    pub product_id: ProductId,
    pub rating: i64,
}

impl RatingForm {
    /// Parse an `application/x-www-form-urlencoded` body.
    pub fn parse(body: &[u8]) -> Result<Self, FormError> {
        let body = std::str::from_utf8(body).map_err(|_| FormError::Encoding)?;

        Self::parse_pairs(body)
    }

    /// The rating carried on the page URL after a post, if any.
    pub fn from_target(target: &str) -> Option<Self> {
        let (_, query) = target.split_once('?')?;
        Self::parse_pairs(query).ok()
    }

    /// Where to send the browser once the rating has been posted.
    pub fn redirect_location(&self) -> String {
        format!("/?product_id={}&rating={}", self.product_id, self.rating)
    }

    fn parse_pairs(encoded: &str) -> Result<Self, FormError> {
        let mut product_id = None;
        let mut rating = None;
        for pair in encoded.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match urlencoding_decode(key).as_str() {
                "product_id" => product_id = Some(urlencoding_decode(value)),
                "rating" => rating = Some(urlencoding_decode(value)),
                _ => {}
            }
        }

        let product_id = product_id.ok_or(FormError::MissingField("product_id"))?;
        let rating = rating.ok_or(FormError::MissingField("rating"))?;

        Ok(Self {
            product_id: product_id
                .parse()
                .map_err(|_| FormError::NotAnInteger {
                    field: "product_id",
                    value: product_id.clone(),
                })?,
            rating: rating.trim().parse().map_err(|_| FormError::NotAnInteger {
                field: "rating",
                value: rating.clone(),
            })?,
        })
    }
}

/// Decode one `application/x-www-form-urlencoded` component.
///
/// Malformed escapes are kept as written.
fn urlencoding_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let byte = s
                    .get(i + 1..i + 3)
                    .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match byte {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_routes() {
        assert_eq!(Route::resolve("GET", "/"), Route::Home);
        assert_eq!(Route::resolve("GET", ""), Route::Home);
        assert_eq!(Route::resolve("get", "/?utm=1"), Route::Home);
        assert_eq!(Route::resolve("POST", "/ratings"), Route::SubmitRating);
        assert_eq!(Route::resolve("POST", "/ratings/"), Route::SubmitRating);
        assert_eq!(Route::resolve("GET", "/ratings"), Route::MethodNotAllowed);
        assert_eq!(Route::resolve("DELETE", "/"), Route::MethodNotAllowed);
        assert_eq!(Route::resolve("GET", "/products"), Route::NotFound);
    }

    #[test]
    fn test_parse_form() {
        let form = RatingForm::parse(b"product_id=7&rating=5").unwrap();
        assert_eq!(form.product_id, ProductId::new(7));
        assert_eq!(form.rating, 5);
    }

    #[test]
    fn test_parse_form_ignores_extra_fields() {
        let form = RatingForm::parse(b"csrf=abc&rating=2&product_id=11").unwrap();
        assert_eq!(form.product_id, ProductId::new(11));
        assert_eq!(form.rating, 2);
    }

    #[test]
    fn test_parse_form_errors() {
        assert_eq!(
            RatingForm::parse(b"rating=5"),
            Err(FormError::MissingField("product_id"))
        );
        assert_eq!(
            RatingForm::parse(b"product_id=7"),
            Err(FormError::MissingField("rating"))
        );
        assert!(matches!(
            RatingForm::parse(b"product_id=seven&rating=5"),
            Err(FormError::NotAnInteger { field: "product_id", .. })
        ));
        assert_eq!(RatingForm::parse(&[0xff]), Err(FormError::Encoding));
    }

    #[test]
    fn test_parse_form_decodes_values() {
        let form = RatingForm::parse(b"product%5Fid=%37&rating=+4").unwrap();
        assert_eq!(form.product_id, ProductId::new(7));
        assert_eq!(form.rating, 4);

        assert!(matches!(
            RatingForm::parse(b"product_id=%zz&rating=4"),
            Err(FormError::NotAnInteger { field: "product_id", value }) if value == "%zz"
        ));
    }

    #[test]
    fn test_urlencoding_decode() {
        assert_eq!(urlencoding_decode("a+b%20c"), "a b c");
        assert_eq!(urlencoding_decode("100%"), "100%");
        assert_eq!(urlencoding_decode("%+1"), "%+1");
        assert_eq!(urlencoding_decode("caf%C3%A9"), "café");
    }

    #[test]
    fn test_redirect_location_round_trips_through_target() {
        let form = RatingForm::parse(b"product_id=7&rating=5").unwrap();
        let location = form.redirect_location();
        assert_eq!(location, "/?product_id=7&rating=5");
        assert_eq!(Route::resolve("GET", &location), Route::Home);
        assert_eq!(RatingForm::from_target(&location), Some(form));
    }

    #[test]
    fn test_from_target_without_rating() {
        assert_eq!(RatingForm::from_target("/"), None);
        assert_eq!(RatingForm::from_target("/?utm=mail"), None);
    }
}
