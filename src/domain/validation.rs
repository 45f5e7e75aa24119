//! Boundary validation: `RawPlaceData` -> `PlaceData`.
//!
//! Fails on the first offending field. Nothing unvalidated reaches the view.

use crate::domain::{
    DateLocale, DomainError, GalleryImage, PlaceData, RawGalleryImage, RawPlaceData, RawStack,
    Stack,
};
use std::collections::HashSet;

impl PlaceData {
    pub fn try_from_raw(raw: RawPlaceData, locale: DateLocale) -> Result<Self, DomainError> {
        let date = non_blank("date", raw.date)?;
        let name = non_blank("name", raw.name)?;
        let description = non_blank("description", raw.description)?;
        let population = non_blank("population", raw.population)?;
        let average_salary = non_blank("averageSalary", raw.average_salary)?;

        let stacks = required("stacks", raw.stacks)?
            .into_iter()
            .enumerate()
            .map(|(i, s)| validate_stack(i, s))
            .collect::<Result<Vec<_>, _>>()?;
        let gallery = required("gallery", raw.gallery)?
            .into_iter()
            .enumerate()
            .map(|(i, g)| validate_image(i, g))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::new();
        for (i, s) in stacks.iter().enumerate() {
            if !seen.insert(s.name.as_str()) {
                return Err(DomainError::validation(
                    format!("stacks[{i}].name"),
                    format!("duplicate stack `{}`", s.name),
                ));
            }
        }
        let mut seen = HashSet::new();
        for (i, g) in gallery.iter().enumerate() {
            if !seen.insert(g.url.as_str()) {
                return Err(DomainError::validation(
                    format!("gallery[{i}].url"),
                    format!("duplicate image `{}`", g.url),
                ));
            }
        }

        Ok(PlaceData {
            date: locale.format(&date)?,
            name,
            description,
            population,
            average_salary,
            stacks,
            gallery,
        })
    }
}

fn validate_stack(i: usize, raw: RawStack) -> Result<Stack, DomainError> {
    Ok(Stack {
        name: non_blank(&format!("stacks[{i}].name"), raw.name)?,
        open_positions: required(&format!("stacks[{i}].openPositions"), raw.open_positions)?,
        annual_average_salary: required(
            &format!("stacks[{i}].annualAverageSalary"),
            raw.annual_average_salary,
        )?,
    })
}

fn validate_image(i: usize, raw: RawGalleryImage) -> Result<GalleryImage, DomainError> {
    Ok(GalleryImage {
        url: non_blank(&format!("gallery[{i}].url"), raw.url)?,
        width: dimension(&format!("gallery[{i}].width"), raw.width)?,
        height: dimension(&format!("gallery[{i}].height"), raw.height)?,
        description: required(&format!("gallery[{i}].description"), raw.description)?,
    })
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::validation(field, "missing"))
}

fn non_blank(field: &str, value: Option<String>) -> Result<String, DomainError> {
    let v = required(field, value)?;
    if v.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be blank"));
    }
    Ok(v)
}

fn dimension(field: &str, value: Option<i64>) -> Result<u32, DomainError> {
    let v = required(field, value)?;
    match u32::try_from(v) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DomainError::validation(
            field,
            format!("must be a positive pixel size, got {v}"),
        )),
    }
}

/// Slugs name files on disk; only `[A-Za-z0-9_-]` is accepted.
pub fn validate_slug(slug: &str) -> Result<(), DomainError> {
    let ok = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(DomainError::validation(
            "slug",
            format!("`{slug}` is not a safe page name"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawGalleryImage, RawStack};

    fn springfield() -> RawPlaceData {
        RawPlaceData {
            date: Some("2021-05-01".to_string()),
            name: Some("Springfield, USA".to_string()),
            description: Some("A town".to_string()),
            population: Some("30,000".to_string()),
            average_salary: Some("$45k".to_string()),
            stacks: Some(vec![RawStack {
                name: Some("Frontend".to_string()),
                open_positions: Some("5".to_string()),
                annual_average_salary: Some("$70k".to_string()),
            }]),
            gallery: Some(vec![RawGalleryImage {
                url: Some("/a.jpg".to_string()),
                width: Some(800),
                height: Some(600),
                description: Some("Downtown".to_string()),
            }]),
        }
    }

    fn field_of(err: DomainError) -> String {
        match err {
            DomainError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_record_formats_date() {
        let place = PlaceData::try_from_raw(springfield(), DateLocale::PtBr).unwrap();
        assert_eq!(place.date, "01/05/2021");
        assert_eq!(place.stacks.len(), 1);
        assert_eq!(place.gallery[0].width, 800);
    }

    #[test]
    fn test_empty_collections_are_valid() {
        let mut raw = springfield();
        raw.stacks = Some(vec![]);
        raw.gallery = Some(vec![]);
        let place = PlaceData::try_from_raw(raw, DateLocale::Iso).unwrap();
        assert!(place.stacks.is_empty());
        assert!(place.gallery.is_empty());
    }

    #[test]
    fn test_missing_and_blank_fields() {
        let mut raw = springfield();
        raw.population = None;
        let err = PlaceData::try_from_raw(raw, DateLocale::PtBr).unwrap_err();
        assert_eq!(field_of(err), "population");

        let mut raw = springfield();
        raw.name = Some("   ".to_string());
        let err = PlaceData::try_from_raw(raw, DateLocale::PtBr).unwrap_err();
        assert_eq!(field_of(err), "name");

        let mut raw = springfield();
        raw.gallery = None;
        let err = PlaceData::try_from_raw(raw, DateLocale::PtBr).unwrap_err();
        assert_eq!(field_of(err), "gallery");
    }

    #[test]
    fn test_nested_field_paths() {
        let mut raw = springfield();
        raw.stacks.as_mut().unwrap().push(RawStack {
            name: Some("Backend".to_string()),
            open_positions: None,
            annual_average_salary: Some("$80k".to_string()),
        });
        let err = PlaceData::try_from_raw(raw, DateLocale::PtBr).unwrap_err();
        assert_eq!(field_of(err), "stacks[1].openPositions");

        let mut raw = springfield();
        raw.gallery.as_mut().unwrap()[0].width = Some(0);
        let err = PlaceData::try_from_raw(raw, DateLocale::PtBr).unwrap_err();
        assert_eq!(field_of(err), "gallery[0].width");

        let mut raw = springfield();
        raw.gallery.as_mut().unwrap()[0].height = Some(-20);
        let err = PlaceData::try_from_raw(raw, DateLocale::PtBr).unwrap_err();
        assert_eq!(field_of(err), "gallery[0].height");
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let mut raw = springfield();
        let dup = raw.stacks.as_ref().unwrap()[0].clone();
        raw.stacks.as_mut().unwrap().push(dup);
        let err = PlaceData::try_from_raw(raw, DateLocale::PtBr).unwrap_err();
        assert_eq!(field_of(err), "stacks[1].name");

        let mut raw = springfield();
        let dup = raw.gallery.as_ref().unwrap()[0].clone();
        raw.gallery.as_mut().unwrap().push(dup);
        let err = PlaceData::try_from_raw(raw, DateLocale::PtBr).unwrap_err();
        assert_eq!(field_of(err), "gallery[1].url");
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut raw = springfield();
        raw.date = Some("01/05/2021".to_string());
        let err = PlaceData::try_from_raw(raw, DateLocale::PtBr).unwrap_err();
        assert_eq!(field_of(err), "date");
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("springfield").is_ok());
        assert!(validate_slug("sao-paulo_2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("../etc").is_err());
        assert!(validate_slug("a/b").is_err());
    }
}
