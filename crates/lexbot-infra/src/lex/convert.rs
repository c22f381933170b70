//! Conversions between lexbot domain types and the Lex SDK shapes.
//!
//! Enumerations cross the boundary as their wire names, so values the SDK
//! does not know yet still round-trip.

use aws_sdk_lexmodelbuilding::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_lexmodelbuilding::operation::get_bot::GetBotOutput;
use aws_sdk_lexmodelbuilding::types;

use lexbot_types::bot::BotDefinition;
use lexbot_types::error::RepositoryError;
use lexbot_types::intent::{FulfillmentActivity, IntentRef};
use lexbot_types::message::{ContentType, Message, Prompt, Statement};

fn invalid(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::InvalidRequest(err.to_string())
}

pub(crate) fn message(message: &Message) -> Result<types::Message, RepositoryError> {
    types::Message::builder()
        .content_type(types::ContentType::from(message.content_type.as_str()))
        .content(&message.content)
        .build()
        .map_err(invalid)
}

fn messages(messages: &[Message]) -> Result<Vec<types::Message>, RepositoryError> {
    messages.iter().map(message).collect()
}

pub(crate) fn statement(statement: &Statement) -> Result<types::Statement, RepositoryError> {
    types::Statement::builder()
        .set_messages(Some(messages(&statement.messages)?))
        .build()
        .map_err(invalid)
}

pub(crate) fn prompt(prompt: &Prompt) -> Result<types::Prompt, RepositoryError> {
    let max_attempts = i32::try_from(prompt.max_attempts).map_err(invalid)?;
    types::Prompt::builder()
        .set_messages(Some(messages(&prompt.messages)?))
        .max_attempts(max_attempts)
        .build()
        .map_err(invalid)
}

pub(crate) fn intent(intent: &IntentRef) -> Result<types::Intent, RepositoryError> {
    types::Intent::builder()
        .intent_name(&intent.intent_name)
        .intent_version(&intent.intent_version)
        .build()
        .map_err(invalid)
}

/// Intents to attach on define-bot; `None` when there are none, so a new bot
/// is submitted without an intent list.
pub(crate) fn intents(
    intents: &[IntentRef],
) -> Result<Option<Vec<types::Intent>>, RepositoryError> {
    if intents.is_empty() {
        return Ok(None);
    }
    intents.iter().map(intent).collect::<Result<Vec<_>, _>>().map(Some)
}

pub(crate) fn fulfillment_activity(
    activity: FulfillmentActivity,
) -> Result<types::FulfillmentActivity, RepositoryError> {
    types::FulfillmentActivity::builder()
        .r#type(types::FulfillmentActivityType::from(activity.as_str()))
        .build()
        .map_err(invalid)
}

fn domain_message(message: &types::Message) -> Result<Message, RepositoryError> {
    let content_type = message
        .content_type()
        .as_str()
        .parse::<ContentType>()
        .map_err(RepositoryError::MalformedResponse)?;
    Ok(Message {
        content: message.content().to_string(),
        content_type,
    })
}

fn domain_messages(messages: &[types::Message]) -> Result<Vec<Message>, RepositoryError> {
    messages.iter().map(domain_message).collect()
}

/// Read a fetched bot into its domain definition.
///
/// Name, locale and the child-directed flag are needed to resubmit the bot,
/// so their absence is a malformed response.
pub(crate) fn bot_definition(output: &GetBotOutput) -> Result<BotDefinition, RepositoryError> {
    let missing = |field: &str| RepositoryError::MalformedResponse(format!("bot has no {field}"));

    let abort_statement = output
        .abort_statement()
        .map(|s| {
            domain_messages(s.messages()).map(|messages| Statement { messages })
        })
        .transpose()?;

    let clarification_prompt = output
        .clarification_prompt()
        .map(|p| {
            domain_messages(p.messages()).map(|messages| Prompt {
                messages,
                max_attempts: u32::try_from(p.max_attempts()).unwrap_or_default(),
            })
        })
        .transpose()?;

    Ok(BotDefinition {
        name: output.name().ok_or_else(|| missing("name"))?.to_string(),
        locale: output
            .locale()
            .ok_or_else(|| missing("locale"))?
            .as_str()
            .to_string(),
        child_directed: output
            .child_directed()
            .ok_or_else(|| missing("child-directed flag"))?,
        abort_statement,
        clarification_prompt,
        intents: output
            .intents()
            .iter()
            .map(|i| IntentRef::new(i.intent_name(), i.intent_version()))
            .collect(),
        checksum: output.checksum().map(str::to_string),
        version: output.version().map(str::to_string),
    })
}

/// Flatten an SDK failure into a repository error.
///
/// Service errors keep their code and message untouched; everything else
/// (dispatch, timeout, unparseable response) keeps its full source chain.
pub(crate) fn sdk_error<E, R>(err: SdkError<E, R>) -> RepositoryError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err {
        SdkError::ServiceError(context) => {
            let service_err = context.into_err();
            RepositoryError::Service {
                code: service_err.code().map(str::to_string),
                message: service_err
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| DisplayErrorContext(&service_err).to_string()),
            }
        }
        other => RepositoryError::Transport(DisplayErrorContext(&other).to_string()),
    }
}
