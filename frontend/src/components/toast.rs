use gloo::timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastState {
    pub fn apply(&self, action: ToastAction) -> Self {
        match action {
            ToastAction::Push(kind, message) => {
                let mut toasts = self.toasts.clone();
                toasts.push(Toast {
                    id: self.next_id,
                    kind,
                    message,
                });
                Self {
                    toasts,
                    next_id: self.next_id.wrapping_add(1),
                }
            }
            ToastAction::Dismiss(id) => Self {
                toasts: self.toasts.iter().filter(|t| t.id != id).cloned().collect(),
                next_id: self.next_id,
            },
        }
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Transient notification channel, available through context inside a
/// `ToastProvider`.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    dispatch: Callback<ToastAction>,
}

impl ToastHandle {
    pub fn new(dispatch: Callback<ToastAction>) -> Self {
        Self { dispatch }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.dispatch.emit(ToastAction::Push(ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.dispatch.emit(ToastAction::Push(ToastKind::Error, message.into()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub duration_ms: u32,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    let handle = {
        let dispatcher = state.dispatcher();
        use_memo((), move |_| ToastHandle::new(Callback::from(move |action| dispatcher.dispatch(action))))
    };

    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastHandle> context={(*handle).clone()}>
            {props.children.clone()}
            <div class="toast-container" aria-live="polite">
                {for state.toasts.iter().map(|toast| html! {
                    <ToastView
                        key={toast.id}
                        toast={toast.clone()}
                        duration_ms={props.duration_ms}
                        on_dismiss={on_dismiss.clone()}
                    />
                })}
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    duration_ms: u32,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    // Timer is cancelled when the toast unmounts
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((id, props.duration_ms), move |(id, duration_ms)| {
            let id = *id;
            let timeout = Timeout::new(*duration_ms, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let on_click = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let kind_class = match props.toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status" onclick={on_click}>
            {props.toast.message.clone()}
        </div>
    }
}
