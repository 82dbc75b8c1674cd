use validator::Validate;

use crate::{
    pkg::internal::{
        adaptors::profiles::spec::{ProfileInput, UserProfile},
        error::Error,
    },
    prelude::Result,
};

/// Appends a trimmed skill unless it is blank or already listed. Returns whether it was added.
pub fn add_skill(profile: &mut UserProfile, skill: &str) -> bool {
    let skill = skill.trim();
    if skill.is_empty() || profile.skills.iter().any(|s| s == skill) {
        return false;
    }
    profile.skills.push(skill.to_string());
    true
}

pub fn remove_skill(profile: &mut UserProfile, skill: &str) -> bool {
    match profile.skills.iter().position(|s| s == skill) {
        Some(idx) => {
            profile.skills.remove(idx);
            true
        }
        None => false,
    }
}

/// Saves the editable profile fields. Skills are managed separately.
pub fn update_profile(profile: &mut UserProfile, input: &ProfileInput) -> Result<()> {
    let input = ProfileInput {
        name: input.name.trim().to_string(),
        phone: input.phone.trim().to_string(),
        qualifications: input.qualifications.trim().to_string(),
        resume: input.resume.trim().to_string(),
    };
    if let Err(errs) = input.validate() {
        return Err(Error::from_validation(&errs, &[("name", "name")]));
    }
    profile.name = input.name;
    profile.phone = non_empty(input.phone);
    profile.qualifications = non_empty(input.qualifications);
    profile.resume = non_empty(input.resume);
    Ok(())
}

fn non_empty(s: String) -> Option<String> {
    Some(s).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_a_skill_twice_is_a_noop() {
        let mut once = UserProfile::default();
        add_skill(&mut once, "React");
        let mut twice = once.clone();
        assert!(!add_skill(&mut twice, "React"));
        assert_eq!(once.skills, twice.skills);
    }

    #[test]
    fn skills_are_trimmed_and_blank_input_ignored() {
        let mut p = UserProfile::default();
        assert!(add_skill(&mut p, "  Rust "));
        assert!(!add_skill(&mut p, "   "));
        assert!(!add_skill(&mut p, "Rust"));
        assert_eq!(p.skills, vec!["Rust"]);
    }

    #[test]
    fn skill_matching_is_case_sensitive() {
        let mut p = UserProfile::default();
        add_skill(&mut p, "react");
        add_skill(&mut p, "React");
        assert_eq!(p.skills, vec!["react", "React"]);
    }

    #[test]
    fn remove_keeps_the_rest_in_order() {
        let mut p = UserProfile::default();
        for s in ["Figma", "CSS", "SQL"] {
            add_skill(&mut p, s);
        }
        assert!(remove_skill(&mut p, "CSS"));
        assert!(!remove_skill(&mut p, "CSS"));
        assert_eq!(p.skills, vec!["Figma", "SQL"]);
    }

    #[test]
    fn profile_requires_a_name() {
        let mut p = UserProfile::default();
        let err = update_profile(&mut p, &ProfileInput::default()).unwrap_err();
        assert_eq!(err.fields(), vec!["name"]);
    }

    #[test]
    fn profile_update_drops_blank_optionals() {
        let mut p = UserProfile::default();
        add_skill(&mut p, "Go");
        update_profile(
            &mut p,
            &ProfileInput {
                name: "Grace".into(),
                phone: "  ".into(),
                qualifications: "BSc Mathematics".into(),
                resume: "https://example.com/cv.pdf".into(),
            },
        )
        .unwrap();
        assert_eq!(p.name, "Grace");
        assert_eq!(p.phone, None);
        assert_eq!(p.qualifications.as_deref(), Some("BSc Mathematics"));
        assert_eq!(p.skills, vec!["Go"]);
    }
}
