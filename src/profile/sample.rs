//! Built-in demonstration profile

use super::model::{
    BasicInfo, Education, Experience, Preferences, Profile, Skill, SocialLinks,
};

/// A complete, valid profile for trying out the store
pub fn sample_profile(id: impl Into<String>) -> Profile {
    Profile {
        id: id.into(),
        last_updated: None,
        profile_name: "Test Profile".to_string(),
        profile_title: "Software Engineer".to_string(),
        profile_summary: "Backend engineer who enjoys tooling and data plumbing.".to_string(),
        basic_info: BasicInfo {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "test@example.com".to_string(),
            phone: None,
            location: Some("Berlin, Germany".to_string()),
            portfolio_url: Some("https://example.com".to_string()),
            social_links: Some(SocialLinks {
                github: Some("https://github.com/example".to_string()),
                ..Default::default()
            }),
        },
        skills: vec![
            Skill {
                id: "s1".to_string(),
                name: "Rust".to_string(),
                category: Some("Languages".to_string()),
            },
            Skill {
                id: "s2".to_string(),
                name: "PostgreSQL".to_string(),
                category: Some("Databases".to_string()),
            },
        ],
        experiences: vec![
            Experience {
                id: "e1".to_string(),
                company: "Example Corp".to_string(),
                title: "Senior Engineer".to_string(),
                description: "Maintains the ingestion pipeline.".to_string(),
                start_date: "2021-04".to_string(),
                end_date: None,
                current: true,
                location: None,
                url: None,
                technologies: Some(vec!["rust".to_string(), "kafka".to_string()]),
            },
            Experience {
                id: "e2".to_string(),
                company: "Startup Ltd".to_string(),
                title: "Engineer".to_string(),
                description: "Built the first version of the billing service.".to_string(),
                start_date: "2018-02".to_string(),
                end_date: Some("2021-03".to_string()),
                current: false,
                location: None,
                url: None,
                technologies: None,
            },
        ],
        education: vec![Education {
            id: "ed1".to_string(),
            school: "Technical University".to_string(),
            degree: "BSc Computer Science".to_string(),
            start_date: "2014-10".to_string(),
            end_date: Some("2018-01".to_string()),
            current: false,
            location: None,
            url: None,
            courses: None,
        }],
        projects: None,
        certifications: None,
        preferences: Some(Preferences {
            default_resume_template: Some("classic".to_string()),
            default_cover_letter_template: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::validate;

    #[test]
    fn test_sample_is_valid() {
        let profile = sample_profile("2");
        assert_eq!(profile.id, "2");
        assert!(validate(&profile).is_ok());
    }
}
