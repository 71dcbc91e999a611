use super::*;

fn summary() -> ExamSummary {
    ExamSummary {
        id: "ex42".to_owned(),
        title: "Algebra Midterm".to_owned(),
        description: None,
        duration_secs: 600,
        question_count: 10,
        proctored: true,
    }
}

#[test]
fn start_dialog_detail_names_count_and_clock() {
    assert_eq!(start_dialog_detail(&summary()), "10 questions · 10:00 once you begin");
}

#[test]
fn exam_route_embeds_the_template_id() {
    assert_eq!(exam_route("ex42"), "/exam/ex42");
}
