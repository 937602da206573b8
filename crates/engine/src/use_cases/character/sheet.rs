//! Plain-text character sheet.

use std::fmt;

use pointbuy_domain::{ability_modifier, Character, CharacterClass, ATTRIBUTE_POINT_CAP};

/// Renders a character's attributes, skills, and class availability.
pub struct CharacterSheetView<'a>(pub &'a Character);

impl fmt::Display for CharacterSheetView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let character = self.0;
        let attributes = character.attributes();

        writeln!(f, "{}", character.name())?;
        writeln!(
            f,
            "Attributes ({} / {} points, {} remaining)",
            attributes.total(),
            ATTRIBUTE_POINT_CAP,
            character.remaining_attribute_points()
        )?;
        for (attribute, score) in attributes.iter() {
            writeln!(
                f,
                "  {:<13} {:>3}  ({:+})",
                attribute.as_str(),
                score,
                ability_modifier(score)
            )?;
        }

        writeln!(
            f,
            "Skills ({} / {} points, {} remaining)",
            character.skill_points().spent(),
            character.skill_budget(),
            character.remaining_skill_points()
        )?;
        for rating in character.skill_ratings() {
            writeln!(
                f,
                "  {:<16} {} {:+} + {} = {:+}",
                rating.name,
                rating.attribute.abbreviation(),
                rating.attribute_modifier,
                rating.points,
                rating.total
            )?;
        }

        writeln!(f, "Classes")?;
        for class in CharacterClass::ALL {
            let marker = if character.selected_class() == Some(class) {
                "*"
            } else {
                " "
            };
            let availability = if character.meets_class_requirements(class) {
                "available"
            } else {
                "requirements not met"
            };
            writeln!(f, " {} {:<10} {}", marker, class.as_str(), availability)?;
        }
        Ok(())
    }
}
