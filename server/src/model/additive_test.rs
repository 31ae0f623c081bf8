use super::*;

const SMALL_MODEL: &str = r#"
intercept: 20000
experience_coefficient: 3000
age_coefficient: 200
gender:
  Male: 1000
  Female: 0
education:
  "Bachelor's": 5000
  PhD: 20000
job_title:
  Software Engineer: 30000
  Director: 60000
"#;

fn small_model() -> AdditiveModel {
    AdditiveModel::from_yaml(SMALL_MODEL).unwrap()
}

fn features(model: &AdditiveModel, gender: &str, job: &str, education: &str) -> Features {
    let enc = model.encoders();
    Features {
        experience_years: 5.0,
        age: 30.0,
        gender: enc.gender.transform(gender).unwrap(),
        job_title: enc.job_title.transform(job).unwrap(),
        education: enc.education.transform(education).unwrap(),
    }
}

#[test]
fn encoders_come_from_table_keys() {
    let model = small_model();
    assert_eq!(model.encoders().gender.classes(), ["Female", "Male"]);
    assert_eq!(model.encoders().education.classes(), ["Bachelor's", "PhD"]);
    assert_eq!(model.encoders().job_title.classes(), ["Director", "Software Engineer"]);
}

#[test]
fn predict_sums_terms() {
    let model = small_model();
    let f = features(&model, "Male", "Software Engineer", "Bachelor's");
    // 20000 + 15000 + 6000 + 1000 + 5000 + 30000
    let salary = model.predict(&f).unwrap();
    assert!((salary - 77_000.0).abs() < 1e-9);
}

#[test]
fn adjustments_follow_encoder_codes() {
    let model = small_model();
    let f = features(&model, "Female", "Director", "PhD");
    // 20000 + 15000 + 6000 + 0 + 20000 + 60000
    let salary = model.predict(&f).unwrap();
    assert!((salary - 121_000.0).abs() < 1e-9);
}

#[test]
fn predict_clamps_at_zero() {
    let model = AdditiveModel::from_yaml(
        "intercept: -1000000\nexperience_coefficient: 0\nage_coefficient: 0\ngender: {Male: 0}\neducation: {PhD: 0}\njob_title: {Clerk: 0}\n",
    )
    .unwrap();
    let f = Features { experience_years: 1.0, age: 20.0, gender: 0, job_title: 0, education: 0 };
    assert!(model.predict(&f).unwrap().abs() < f64::EPSILON);
}

#[test]
fn out_of_range_code_is_an_error() {
    let model = small_model();
    let f = Features { experience_years: 1.0, age: 20.0, gender: 7, job_title: 0, education: 0 };
    assert!(matches!(
        model.predict(&f),
        Err(ModelError::CodeOutOfRange { feature: "gender", code: 7 })
    ));
}

#[test]
fn empty_table_is_rejected() {
    let err = AdditiveModel::from_yaml(
        "intercept: 0\nexperience_coefficient: 0\nage_coefficient: 0\ngender: {}\neducation: {PhD: 0}\njob_title: {Clerk: 0}\n",
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::EmptyEncoder("gender")));
}

#[test]
fn malformed_yaml_is_rejected() {
    assert!(matches!(AdditiveModel::from_yaml("intercept: [oops"), Err(ModelError::Parse(_))));
}

#[test]
fn load_reports_missing_file() {
    let err = AdditiveModel::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)));
}

#[test]
fn shipped_model_file_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/salary_model.yaml");
    let model = AdditiveModel::load(&path).unwrap();
    assert!(model.encoders().job_title.transform("Software Engineer").is_some());
    assert!(model.encoders().gender.transform("Male").is_some());
    assert!(model.encoders().education.transform("Bachelor's").is_some());
}
