//! NEIS records: school meals and academic schedules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::MealType;

/// School meal for one date and slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub meal_id: String,
    pub school_code: String,
    pub school_name: String,
    pub office_code: String,
    pub office_name: String,
    pub meal_date: NaiveDate,
    pub meal_type: MealType,
    #[serde(default)]
    pub meal_menu: Vec<String>,
    #[serde(default)]
    pub meal_allergy_info: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_calories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_serve_count: Option<u32>,
}

/// Academic calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub schedule_id: String,
    pub school_code: String,
    pub school_name: String,
    pub office_code: String,
    pub office_name: String,
    pub schedule_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_course_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_night_type: Option<String>,
    #[serde(default)]
    pub target_grades: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_meal_with_iso_date() {
        let meal: Meal = serde_json::from_value(json!({
            "mealId": "m-20260203-lunch",
            "schoolCode": "7380292",
            "schoolName": "광주소프트웨어마이스터고등학교",
            "officeCode": "F10",
            "officeName": "광주광역시교육청",
            "mealDate": "2026-02-03",
            "mealType": "LUNCH",
            "mealMenu": ["백미밥", "김치찌개"],
            "mealAllergyInfo": ["9", "13"],
            "mealCalories": "812.4 Kcal"
        }))
        .unwrap();

        assert_eq!(meal.meal_date, NaiveDate::from_ymd_opt(2026, 2, 3).unwrap());
        assert_eq!(meal.meal_type, MealType::Lunch);
        assert_eq!(meal.meal_menu.len(), 2);
        assert!(meal.meal_serve_count.is_none());
    }

    #[test]
    fn decodes_schedule_with_sparse_fields() {
        let schedule: Schedule = serde_json::from_value(json!({
            "scheduleId": "s-20260302",
            "schoolCode": "7380292",
            "schoolName": "광주소프트웨어마이스터고등학교",
            "officeCode": "F10",
            "officeName": "광주광역시교육청",
            "scheduleDate": "2026-03-02",
            "eventName": "입학식",
            "targetGrades": [1]
        }))
        .unwrap();

        assert_eq!(schedule.event_name.as_deref(), Some("입학식"));
        assert_eq!(schedule.target_grades, vec![1]);
        assert!(schedule.event_content.is_none());
    }
}
