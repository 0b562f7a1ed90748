//! Invariant checks applied before a profile is written

use thiserror::Error;
use url::Url;

use super::model::Profile;

/// First rule a profile breaks
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("profile id is empty")]
    MissingId,

    #[error("email is required")]
    MissingEmail,

    #[error("email is not a valid address: {0}")]
    InvalidEmail(String),

    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{section} entry {id} is current but has an end date")]
    CurrentWithEndDate { section: &'static str, id: String },

    #[error("{section} entry {id} has ended but no end date")]
    MissingEndDate { section: &'static str, id: String },
}

/// Check a profile against the model invariants
pub fn validate(profile: &Profile) -> Result<(), ValidationError> {
    if profile.id.trim().is_empty() {
        return Err(ValidationError::MissingId);
    }

    check_email(&profile.basic_info.email)?;

    let info = &profile.basic_info;
    check_url("portfolioUrl", info.portfolio_url.as_deref())?;
    if let Some(links) = &info.social_links {
        check_url("socialLinks.linkedin", links.linkedin.as_deref())?;
        check_url("socialLinks.github", links.github.as_deref())?;
        check_url("socialLinks.twitter", links.twitter.as_deref())?;
    }

    for exp in &profile.experiences {
        check_dates("experience", &exp.id, exp.current, exp.end_date.as_deref())?;
    }
    for edu in &profile.education {
        check_dates("education", &edu.id, edu.current, edu.end_date.as_deref())?;
    }

    Ok(())
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }

    // local@domain with a dot somewhere in the domain
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

fn check_url(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) if Url::parse(v).is_err() => Err(ValidationError::InvalidUrl {
            field,
            value: v.to_string(),
        }),
        _ => Ok(()),
    }
}

fn check_dates(
    section: &'static str,
    id: &str,
    current: bool,
    end_date: Option<&str>,
) -> Result<(), ValidationError> {
    match (current, end_date) {
        (true, Some(_)) => Err(ValidationError::CurrentWithEndDate {
            section,
            id: id.to_string(),
        }),
        (false, None) => Err(ValidationError::MissingEndDate {
            section,
            id: id.to_string(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::model::{Education, Experience, SocialLinks};

    fn experience(current: bool, end_date: Option<&str>) -> Experience {
        Experience {
            id: "e1".to_string(),
            company: "Acme".to_string(),
            title: "Engineer".to_string(),
            description: String::new(),
            start_date: "2020-01".to_string(),
            end_date: end_date.map(str::to_string),
            current,
            location: None,
            url: None,
            technologies: None,
        }
    }

    fn education(current: bool, end_date: Option<&str>) -> Education {
        Education {
            id: "ed1".to_string(),
            school: "State University".to_string(),
            degree: "BSc".to_string(),
            start_date: "2012-09".to_string(),
            end_date: end_date.map(str::to_string),
            current,
            location: None,
            url: None,
            courses: None,
        }
    }

    #[test]
    fn test_minimal_profile_is_valid() {
        let profile = Profile::new("1", "Alice", "Smith", "a@x.com");
        assert_eq!(validate(&profile), Ok(()));
    }

    #[test]
    fn test_empty_id() {
        let profile = Profile::new("  ", "Alice", "Smith", "a@x.com");
        assert_eq!(validate(&profile), Err(ValidationError::MissingId));
    }

    #[test]
    fn test_email_required() {
        let profile = Profile::new("1", "Alice", "Smith", "");
        assert_eq!(validate(&profile), Err(ValidationError::MissingEmail));
    }

    #[test]
    fn test_email_shape() {
        for bad in ["alice", "@x.com", "a@", "a@x", "a@@x.com", "a@.com", "a b@x.com"] {
            let profile = Profile::new("1", "Alice", "Smith", bad);
            assert!(
                matches!(validate(&profile), Err(ValidationError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_bad_portfolio_url() {
        let mut profile = Profile::new("1", "Alice", "Smith", "a@x.com");
        profile.basic_info.portfolio_url = Some("not a url".to_string());

        assert_eq!(
            validate(&profile),
            Err(ValidationError::InvalidUrl {
                field: "portfolioUrl",
                value: "not a url".to_string(),
            })
        );
    }

    #[test]
    fn test_social_links() {
        let mut profile = Profile::new("1", "Alice", "Smith", "a@x.com");
        profile.basic_info.social_links = Some(SocialLinks {
            github: Some("https://github.com/alice".to_string()),
            twitter: Some("@alice".to_string()),
            ..Default::default()
        });

        assert!(matches!(
            validate(&profile),
            Err(ValidationError::InvalidUrl {
                field: "socialLinks.twitter",
                ..
            })
        ));
    }

    #[test]
    fn test_experience_dates() {
        let mut profile = Profile::new("1", "Alice", "Smith", "a@x.com");

        profile.experiences = vec![experience(true, None), experience(false, Some("2022-03"))];
        assert_eq!(validate(&profile), Ok(()));

        profile.experiences = vec![experience(true, Some("2022-03"))];
        assert_eq!(
            validate(&profile),
            Err(ValidationError::CurrentWithEndDate {
                section: "experience",
                id: "e1".to_string(),
            })
        );

        profile.experiences = vec![experience(false, None)];
        assert_eq!(
            validate(&profile),
            Err(ValidationError::MissingEndDate {
                section: "experience",
                id: "e1".to_string(),
            })
        );
    }

    #[test]
    fn test_education_dates() {
        let mut profile = Profile::new("1", "Alice", "Smith", "a@x.com");

        profile.education = vec![education(false, None)];
        assert_eq!(
            validate(&profile),
            Err(ValidationError::MissingEndDate {
                section: "education",
                id: "ed1".to_string(),
            })
        );

        profile.education = vec![education(true, Some("2016-06"))];
        assert!(matches!(
            validate(&profile),
            Err(ValidationError::CurrentWithEndDate { .. })
        ));
    }

    #[test]
    fn test_error_message() {
        let err = ValidationError::MissingEndDate {
            section: "experience",
            id: "e1".to_string(),
        };
        assert_eq!(err.to_string(), "experience entry e1 has ended but no end date");
    }
}
