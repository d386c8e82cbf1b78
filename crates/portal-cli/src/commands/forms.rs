use anyhow::Result;
use portal_engine::{CaseSubmission, FeedbackForm};

use super::Context;

pub async fn feedback(general: String, suggestions: String, ctx: &Context) -> Result<()> {
    let mut form = FeedbackForm::new(ctx.provider.clone(), ctx.notifier.clone());
    form.fields_mut().general_feedback = general;
    form.fields_mut().improvement_suggestions = suggestions;
    form.submit().await;
    ctx.report()
}

pub async fn case(
    subject: String,
    description: String,
    status: Option<String>,
    ctx: &Context,
) -> Result<()> {
    let mut case = CaseSubmission::new(
        ctx.provider.clone(),
        ctx.notifier.clone(),
        ctx.config.site.submission_flow.clone(),
    );

    if ctx.format == crate::cli::Format::Text {
        for section in CaseSubmission::sections() {
            println!("{}: {}", section.title, section.content);
        }
        println!();
    }

    case.request_mut().subject = subject;
    case.request_mut().description = description;
    case.submit().await;

    if case.is_started() {
        println!("✓ Started flow {}", ctx.config.site.submission_flow);
        if let Some(status) = status {
            case.on_status(&status);
        }
    }
    ctx.report()
}
