use super::ApiError;

use crate::clients::gemini::ReviewText;

pub fn validate_prompt(prompt: &str) -> Result<&str, ApiError> {
    if prompt.is_empty() {
        return Err(ApiError::validation("Prompt is required"));
    }
    Ok(prompt)
}

pub fn validate_url(url: &str) -> Result<&str, ApiError> {
    if url.is_empty() {
        return Err(ApiError::validation("Amazon URL is required"));
    }
    Ok(url)
}

pub fn validate_reviews(reviews: &[ReviewText]) -> Result<&[ReviewText], ApiError> {
    if reviews.is_empty() {
        return Err(ApiError::validation("Reviews are required"));
    }
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_prompt() {
        assert!(validate_prompt("Write a review").is_ok());
        assert!(validate_prompt("").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://www.amazon.com/dp/B0").is_ok());
        assert!(validate_url("").is_err());
    }

    #[test]
    fn test_validate_reviews() {
        let reviews = vec![ReviewText {
            review: "Solid".to_string(),
        }];
        assert!(validate_reviews(&reviews).is_ok());
        assert!(validate_reviews(&[]).is_err());
    }
}
