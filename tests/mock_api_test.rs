//! Mock API tests against a wiremock server.
//!
//! Fixtures follow the DataGSM response envelope `{status, code, message,
//! data}` and its documented error body shape.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use datagsm_openapi::api::{ClubQuery, DateQuery, StudentQuery};
use datagsm_openapi::models::{ClubType, MealType};
use datagsm_openapi::{ApiErrorKind, DataGsmClient, Error};

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({
        "status": "success",
        "code": 200,
        "message": "Request successful",
        "data": data,
    })
}

fn error_body(code: u16, message: &str) -> serde_json::Value {
    json!({
        "status": "error",
        "code": code,
        "message": message,
        "data": null,
    })
}

fn student_fixture(id: i64, name: &str, grade: u8) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "sex": "MAN",
        "email": format!("s{id}@gsm.hs.kr"),
        "grade": grade,
        "classNum": 2,
        "number": 5,
        "studentNumber": 1205,
        "major": "SW_DEVELOPMENT",
        "role": "GENERAL_STUDENT",
        "isLeaveSchool": false,
    })
}

fn client_for(server: &MockServer) -> DataGsmClient {
    DataGsmClient::builder()
        .api_key("test-api-key")
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn get_students_sends_key_and_decodes_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/students"))
        .and(header("X-API-KEY", "test-api-key"))
        .and(query_param("grade", "1"))
        .and(query_param("page", "0"))
        .and(query_param("size", "300"))
        .and(query_param("sortDirection", "ASC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "students": [student_fixture(1, "김철수", 1)],
            "totalElements": 1,
            "totalPages": 1,
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .students()
        .get_students(&StudentQuery::new().grade(1))
        .await
        .unwrap();

    assert_eq!(page.total_elements, 1);
    assert_eq!(page.students[0].name, "김철수");
    assert_eq!(page.students[0].grade, 1);
}

#[tokio::test]
async fn get_student_returns_first_match_or_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/students"))
        .and(query_param("studentId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "students": [student_fixture(7, "이영희", 2)],
            "totalElements": 1,
            "totalPages": 1,
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/students"))
        .and(query_param("studentId", "999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "students": [],
            "totalElements": 0,
            "totalPages": 0,
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let found = client.students().get_student(7).await.unwrap();
    assert_eq!(found.unwrap().id, 7);

    let missing = client.students().get_student(999).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn structured_404_surfaces_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clubs"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(error_body(404, "club not found")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.clubs().get_club(1).await.unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    match err {
        Error::Api { kind, message, .. } => {
            assert_eq!(kind, ApiErrorKind::NotFound);
            assert_eq!(message, "club not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_its_own_kind() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(401).set_body_json(error_body(401, "invalid API key")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .projects()
        .get_projects(&Default::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Api {
            kind: ApiErrorKind::Unauthorized,
            ..
        }
    ));
}

#[tokio::test]
async fn malformed_json_is_schema_mismatch_not_a_crash() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/students"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .students()
        .get_students(&StudentQuery::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::SchemaMismatch { .. }));
}

#[tokio::test]
async fn success_envelope_without_data_is_schema_mismatch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "code": 200,
            "message": "ok",
            "data": null,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .projects()
        .get_projects(&Default::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::SchemaMismatch { .. }));
}

#[tokio::test]
async fn validation_failure_makes_no_network_call() {
    let server = MockServer::start().await;

    // The mock server must see zero requests; verified on drop.
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client
        .students()
        .get_students(&StudentQuery::new().grade(9))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = client
        .neis()
        .get_meals(&DateQuery::between(
            chrono::NaiveDate::from_ymd_opt(2026, 2, 7).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn slow_response_surfaces_as_timeout() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!([])))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = DataGsmClient::builder()
        .api_key("test-api-key")
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.neis().get_schedules(&DateQuery::today()).await.unwrap_err();
    assert!(matches!(err, Error::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn neis_meals_encode_dates_and_decode_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/neis/meals"))
        .and(query_param("fromDate", "2026-02-01"))
        .and(query_param("toDate", "2026-02-07"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([{
            "mealId": "m-1",
            "schoolCode": "7380292",
            "schoolName": "광주소프트웨어마이스터고등학교",
            "officeCode": "F10",
            "officeName": "광주광역시교육청",
            "mealDate": "2026-02-03",
            "mealType": "DINNER",
            "mealMenu": ["잡곡밥"],
            "mealAllergyInfo": [],
        }]))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let meals = client
        .neis()
        .get_meals(&DateQuery::between(
            chrono::NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2026, 2, 7).unwrap(),
        ))
        .await
        .unwrap();

    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].meal_type, MealType::Dinner);
}

#[tokio::test]
async fn clubs_forward_type_filter_and_decode_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clubs"))
        .and(query_param("clubType", "MAJOR_CLUB"))
        .and(query_param("includeLeaderInParticipants", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "totalPages": 1,
            "totalElements": 1,
            "clubs": [{
                "id": 3,
                "name": "GDSC",
                "type": "MAJOR_CLUB",
                "leader": {
                    "id": 7,
                    "name": "이영희",
                    "email": "s7@gsm.hs.kr",
                    "studentNumber": 2101,
                    "major": "AI",
                    "sex": "WOMAN",
                },
                "participants": [],
            }],
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .clubs()
        .get_clubs(&ClubQuery::new().club_type(ClubType::MajorClub))
        .await
        .unwrap();

    assert_eq!(page.clubs[0].club_type, ClubType::MajorClub);
    assert_eq!(page.clubs[0].leader.name, "이영희");
}

#[tokio::test]
async fn concurrent_calls_share_one_client_safely() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "students": [student_fixture(1, "김철수", 1)],
            "totalElements": 1,
            "totalPages": 1,
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "totalPages": 1,
            "totalElements": 2,
            "projects": [
                {"id": 1, "name": "출석체크", "participants": []},
                {"id": 2, "name": "급식앱", "participants": []},
            ],
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let students_api = client.students();
    let projects_api = client.projects();
    let student_query = StudentQuery::new();
    let project_query = Default::default();
    let (students, projects) = tokio::join!(
        students_api.get_students(&student_query),
        projects_api.get_projects(&project_query),
    );

    assert_eq!(students.unwrap().total_elements, 1);
    assert_eq!(projects.unwrap().projects.len(), 2);
}
