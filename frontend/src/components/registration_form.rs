use std::future::Future;
use std::rc::Rc;

use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::registration::{
    BrowserLogo, FieldUpdate, LogoFile, SubmissionWorkflow, SubmitError, SubmitGuard, TextField, WorkflowPhase,
};
use crate::utils::api::{Dispatched, FireAndForgetSender, NoCorsSender};
use crate::utils::notify;

type FormState = SubmissionWorkflow<BrowserLogo>;

pub enum WorkflowAction<L: LogoFile> {
    Update(FieldUpdate<L>),
    Begin,
    Finish(Result<Dispatched, SubmitError>),
    Acknowledge,
}

impl<L: LogoFile + 'static> Reducible for SubmissionWorkflow<L> {
    type Action = WorkflowAction<L>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WorkflowAction::Update(update) => next.update_field(update),
            WorkflowAction::Begin => {
                if let Err(e) = next.begin_submit() {
                    warn!("Could not start submission: {}", e);
                    return self;
                }
            }
            WorkflowAction::Finish(outcome) => next.complete_submit(&outcome),
            WorkflowAction::Acknowledge => next.acknowledge(),
        }
        Rc::new(next)
    }
}

/// Validates `state` and returns the send to spawn.
///
/// `Ok(None)` means another submission still holds `guard`; nothing is sent.
/// The returned future dispatches `Finish` and releases the guard once the
/// send settles.
fn start_submission<L, S>(
    guard: &SubmitGuard,
    state: &SubmissionWorkflow<L>,
    sender: Rc<S>,
    dispatch: Callback<WorkflowAction<L>>,
) -> Result<Option<impl Future<Output = Result<Dispatched, SubmitError>>>, SubmitError>
where
    L: LogoFile + 'static,
    S: FireAndForgetSender + 'static,
{
    let Some(in_flight) = guard.try_acquire() else {
        warn!("Submit ignored, a registration is already in flight");
        return Ok(None);
    };
    let submission = state.prepare()?;
    dispatch.emit(WorkflowAction::Begin);

    Ok(Some(async move {
        let outcome = submission.send(&*sender).await;
        dispatch.emit(WorkflowAction::Finish(outcome.clone()));
        drop(in_flight);
        outcome
    }))
}

fn text_input(
    state: &FormState,
    field: TextField,
    kind: &'static str,
    placeholder: &'static str,
    required: bool,
    oninput: &Callback<InputEvent>,
) -> Html {
    html! {
        <input
            type={kind}
            name={field.as_str()}
            class="reg-input"
            placeholder={placeholder}
            value={state.request().text(field).to_string()}
            oninput={oninput.clone()}
            required={required}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    /// Where registrations are posted.
    pub endpoint: AttrValue,
}

#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let workflow = use_reducer(FormState::new);
    let guard = use_memo(|_| SubmitGuard::default(), ());
    let logo_input = use_node_ref();

    let on_text_input = {
        let workflow = workflow.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.name().parse::<TextField>() {
                Ok(field) => workflow.dispatch(WorkflowAction::Update(FieldUpdate::Text(field, input.value()))),
                Err(e) => warn!("{}", e),
            }
        })
    };

    let on_logo_change = {
        let workflow = workflow.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // An emptied picker keeps the previous logo.
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                workflow.dispatch(WorkflowAction::Update(FieldUpdate::Logo(BrowserLogo::new(file))));
            }
        })
    };

    let onsubmit = {
        let workflow = workflow.clone();
        let guard = guard.clone();
        let endpoint = props.endpoint.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let dispatcher = workflow.dispatcher();
            let dispatch = Callback::from(move |action: WorkflowAction<BrowserLogo>| dispatcher.dispatch(action));
            let sender = Rc::new(NoCorsSender::new(endpoint.to_string()));

            match start_submission(&guard, &*workflow, sender, dispatch) {
                Ok(Some(send)) => spawn_local(async move {
                    if let Err(err) = send.await {
                        notify::alert(&err.user_message());
                    }
                }),
                Ok(None) => {}
                Err(err) => notify::alert(&err.user_message()),
            }
        })
    };

    let on_acknowledge = {
        let workflow = workflow.clone();
        let logo_input = logo_input.clone();
        Callback::from(move |_: MouseEvent| {
            // File inputs can't be driven by `value=`, clear it by hand.
            if let Some(input) = logo_input.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            workflow.dispatch(WorkflowAction::Acknowledge);
        })
    };

    let submitting = workflow.phase() == WorkflowPhase::Submitting;

    html! {
        <section class="registration-section">
            <h2>{"Get Your Ad For Free"}</h2>
            <form class="registration-form" {onsubmit}>
                {text_input(&workflow, TextField::Name, "text", "Name", true, &on_text_input)}
                {text_input(&workflow, TextField::Mobile, "text", "Mobile", true, &on_text_input)}
                {text_input(&workflow, TextField::Email, "email", "Email", false, &on_text_input)}
                <div class="logo-field">
                    <label for="logo-upload">{"Logo (Mandatory)"}</label>
                    <input
                        id="logo-upload"
                        type="file"
                        name="logo"
                        accept="image/*"
                        class="reg-input"
                        ref={logo_input}
                        onchange={on_logo_change}
                        required=true
                    />
                    if let Some(url) = workflow.preview() {
                        <img class="logo-preview" src={url.src().to_string()} alt="Logo Preview" />
                    }
                </div>
                {text_input(&workflow, TextField::Insta, "text", "Instagram Link", false, &on_text_input)}
                {text_input(&workflow, TextField::Youtube, "text", "YouTube Link", false, &on_text_input)}
                {text_input(&workflow, TextField::Website, "text", "Website Link", false, &on_text_input)}
                <button type="submit" class="register-button" disabled={submitting}>
                    if submitting {
                        <><span class="register-spinner"></span>{"Submitting..."}</>
                    } else {
                        <>{"Register"}</>
                    }
                </button>
            </form>

            if workflow.phase() == WorkflowPhase::Succeeded {
                <div class="modal-overlay">
                    <div class="modal-content">
                        <h4>{"Registered Successfully!"}</h4>
                        <p>{"We'll get in touch with you shortly."}</p>
                        <div class="modal-buttons">
                            <button class="register-button" onclick={on_acknowledge}>{"OK"}</button>
                        </div>
                    </div>
                </div>
            }

            <style>
                {r#"
                .registration-section {
                    background: #1f2937;
                    padding: 1.5rem;
                    border-radius: 12px;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
                    max-width: 36rem;
                    margin: 0 auto;
                }
                .registration-section h2 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                    text-align: center;
                }
                .registration-form {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .reg-input {
                    padding: 0.5rem;
                    border: 1px solid #4b5563;
                    border-radius: 4px;
                    background: #374151;
                    color: white;
                }
                .reg-input::placeholder {
                    color: #9ca3af;
                }
                .logo-field {
                    grid-column: span 2;
                }
                .logo-field label {
                    display: block;
                    font-size: 0.875rem;
                    color: #9ca3af;
                    margin-bottom: 0.25rem;
                }
                .logo-field .reg-input {
                    width: 100%;
                }
                .logo-preview {
                    margin-top: 0.5rem;
                    width: 8rem;
                    height: 8rem;
                    object-fit: contain;
                    border: 2px solid #6366f1;
                    border-radius: 6px;
                }
                .register-button {
                    grid-column: span 2;
                    background: #4f46e5;
                    color: white;
                    padding: 0.5rem 1.5rem;
                    border: none;
                    border-radius: 4px;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .register-button:hover {
                    background: #4338ca;
                }
                .register-button:disabled {
                    opacity: 0.7;
                    cursor: wait;
                }
                .register-spinner {
                    display: inline-block;
                    width: 14px;
                    height: 14px;
                    margin-right: 8px;
                    border: 2px solid rgba(255, 255, 255, 0.4);
                    border-top-color: white;
                    border-radius: 50%;
                    animation: register-spin 0.8s linear infinite;
                    vertical-align: middle;
                }
                @keyframes register-spin {
                    to { transform: rotate(360deg); }
                }
                .modal-overlay {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                }
                .modal-content {
                    background: white;
                    color: #111827;
                    padding: 24px;
                    border-radius: 12px;
                    max-width: 400px;
                    width: 90%;
                    text-align: center;
                }
                .modal-content h4 {
                    margin: 0 0 12px 0;
                    font-size: 1.25rem;
                }
                .modal-content p {
                    color: #666;
                    margin-bottom: 16px;
                }
                .modal-buttons {
                    display: flex;
                    justify-content: center;
                }
                @media (max-width: 640px) {
                    .registration-form {
                        grid-template-columns: 1fr;
                    }
                    .logo-field, .register-button {
                        grid-column: span 1;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::registration::testing::{FakeLogo, RecordingSender};
    use crate::registration::RegistrationRequest;

    type TestState = SubmissionWorkflow<FakeLogo>;

    fn filled(mobile: &str) -> Rc<TestState> {
        let mut state = TestState::new();
        state.update_field(FieldUpdate::Text(TextField::Name, "Akshaya Bakery".to_string()));
        state.update_field(FieldUpdate::Text(TextField::Mobile, mobile.to_string()));
        state.update_field(FieldUpdate::Logo(FakeLogo::readable(b"png")));
        Rc::new(state)
    }

    fn recording_dispatch() -> (Callback<WorkflowAction<FakeLogo>>, Rc<RefCell<Vec<WorkflowAction<FakeLogo>>>>) {
        let actions = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&actions);
        (Callback::from(move |action: WorkflowAction<FakeLogo>| sink.borrow_mut().push(action)), actions)
    }

    #[test]
    fn second_begin_keeps_the_same_state() {
        let submitting = filled("9876543210").reduce(WorkflowAction::Begin);
        assert_eq!(submitting.phase(), WorkflowPhase::Submitting);

        let again = Rc::clone(&submitting).reduce(WorkflowAction::Begin);

        assert!(Rc::ptr_eq(&submitting, &again));
        assert_eq!(again.phase(), WorkflowPhase::Submitting);
    }

    #[test]
    fn failed_finish_returns_to_editing() {
        let submitting = filled("9876543210").reduce(WorkflowAction::Begin);

        let next = submitting.reduce(WorkflowAction::Finish(Err(SubmitError::Transport {
            url: "https://sheets.invalid/exec".to_string(),
            reason: "TypeError: Failed to fetch".to_string(),
        })));

        assert_eq!(next.phase(), WorkflowPhase::Editing);
        assert_eq!(next.request().mobile, "9876543210");
    }

    #[test]
    fn acknowledge_action_resets_state() {
        let succeeded = filled("9876543210")
            .reduce(WorkflowAction::Begin)
            .reduce(WorkflowAction::Finish(Ok(Dispatched)));
        assert_eq!(succeeded.phase(), WorkflowPhase::Succeeded);

        let next = succeeded.reduce(WorkflowAction::Acknowledge);

        assert_eq!(next.phase(), WorkflowPhase::Editing);
        assert_eq!(next.request(), &RegistrationRequest::default());
        assert!(next.preview().is_none());
    }

    #[tokio::test]
    async fn double_submit_from_one_render_sends_once() {
        let state = filled("9876543210");
        let guard = SubmitGuard::default();
        let sender = Rc::new(RecordingSender::default());
        let (dispatch, actions) = recording_dispatch();

        let first = start_submission(&guard, &*state, Rc::clone(&sender), dispatch.clone()).unwrap();
        let second = start_submission(&guard, &*state, Rc::clone(&sender), dispatch).unwrap();
        assert!(first.is_some());
        assert!(second.is_none());

        assert_eq!(first.unwrap().await, Ok(Dispatched));
        assert_eq!(sender.count(), 1);
        assert!(!guard.is_busy());

        let end = actions.borrow_mut().drain(..).fold(state, |state, action| state.reduce(action));
        assert_eq!(end.phase(), WorkflowPhase::Succeeded);
    }

    #[tokio::test]
    async fn rejected_submit_releases_the_guard() {
        let guard = SubmitGuard::default();
        let sender = Rc::new(RecordingSender::default());
        let (dispatch, actions) = recording_dispatch();

        let rejected = start_submission(&guard, &*filled("9876543210\n"), Rc::clone(&sender), dispatch.clone());
        assert!(rejected.is_err());
        assert!(!guard.is_busy());
        assert!(actions.borrow().is_empty());

        let send = start_submission(&guard, &*filled("9876543210"), Rc::clone(&sender), dispatch)
            .unwrap()
            .unwrap();
        send.await.unwrap();

        assert_eq!(sender.count(), 1);
        assert_eq!(sender.sent.borrow()[0].mobile, "9876543210");
    }

    #[tokio::test]
    async fn guard_is_released_after_a_failed_send() {
        let state = filled("9876543210");
        let guard = SubmitGuard::default();
        let (dispatch, actions) = recording_dispatch();

        let send = start_submission(&guard, &*state, Rc::new(RecordingSender::failing()), dispatch)
            .unwrap()
            .unwrap();
        assert!(guard.is_busy());
        assert!(send.await.is_err());

        assert!(!guard.is_busy());
        let end = actions.borrow_mut().drain(..).fold(state, |state, action| state.reduce(action));
        assert_eq!(end.phase(), WorkflowPhase::Editing);
    }
}
