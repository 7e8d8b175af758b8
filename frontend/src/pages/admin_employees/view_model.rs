use super::repository::EmployeesRepository;
use crate::{
    api::{
        ApiClient, ApiError, CreateEmployee, Employee, Role, UpdateEmployee, MIN_PASSWORD_LEN,
    },
    state::{
        resource::RemoteResource,
        table::TableState,
        toast::{use_toasts, ToastStore},
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFormInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub position: String,
    pub role: Role,
}

impl Default for EmployeeFormInput {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            department: String::new(),
            position: String::new(),
            role: Role::Employee,
        }
    }
}

impl From<&Employee> for EmployeeFormInput {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            password: String::new(),
            department: employee.department.clone().unwrap_or_default(),
            position: employee.position.clone().unwrap_or_default(),
            role: employee.role,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn require_names(input: &EmployeeFormInput) -> Result<(String, String), ApiError> {
    let first = input.first_name.trim();
    let last = input.last_name.trim();
    if first.is_empty() || last.is_empty() {
        return Err(ApiError::validation("First and last name are required"));
    }
    if input.role == Role::Unresolved {
        return Err(ApiError::validation("Choose a role"));
    }
    Ok((first.to_string(), last.to_string()))
}

pub fn validate_new_employee(input: &EmployeeFormInput) -> Result<CreateEmployee, ApiError> {
    let (first_name, last_name) = require_names(input)?;
    let email = input.email.trim();
    if !email.contains('@') {
        return Err(ApiError::validation("Enter a valid email address"));
    }
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(CreateEmployee {
        first_name,
        last_name,
        email: email.to_string(),
        password: input.password.clone(),
        department: optional(&input.department),
        position: optional(&input.position),
        role: input.role,
    })
}

pub fn validate_employee_update(input: &EmployeeFormInput) -> Result<UpdateEmployee, ApiError> {
    let (first_name, last_name) = require_names(input)?;
    Ok(UpdateEmployee {
        first_name,
        last_name,
        department: optional(&input.department),
        position: optional(&input.position),
        role: input.role,
    })
}

pub type EmployeesResource = RemoteResource<(), Vec<Employee>>;

pub fn employees_resource(repo: EmployeesRepository) -> EmployeesResource {
    RemoteResource::new(move |_: ()| {
        let repo = repo.clone();
        async move { repo.list().await }
    })
}

/// Creates when `editing` is `None`, updates that employee otherwise.
pub async fn save_employee(
    repo: EmployeesRepository,
    employees: EmployeesResource,
    toasts: ToastStore,
    editing: Option<String>,
    input: EmployeeFormInput,
) -> Result<(), ApiError> {
    let outcome = match editing {
        None => match validate_new_employee(&input) {
            Ok(payload) => employees.mutate(repo.create(payload)).await,
            Err(err) => Err(err),
        },
        Some(id) => match validate_employee_update(&input) {
            Ok(payload) => employees.mutate(repo.update(id, payload)).await,
            Err(err) => Err(err),
        },
    };
    match &outcome {
        Ok(()) => {
            toasts.push_success("Employee saved");
        }
        Err(err) => {
            toasts.push_error(err, "Could not save the employee");
        }
    }
    outcome
}

pub async fn remove_employee(
    repo: EmployeesRepository,
    employees: EmployeesResource,
    toasts: ToastStore,
    id: String,
) -> Result<(), ApiError> {
    let outcome = employees.mutate(repo.delete(id)).await;
    match &outcome {
        Ok(()) => {
            toasts.push_success("Employee deleted");
        }
        Err(err) => {
            toasts.push_error(err, "Could not delete the employee");
        }
    }
    outcome
}

/// Closes the delete confirmation only once the server accepted the delete.
pub fn settle_delete(pending_delete: RwSignal<Option<Employee>>, outcome: &Result<(), ApiError>) {
    if outcome.is_ok() {
        pending_delete.set(None);
    }
}

#[derive(Clone, Copy)]
pub struct AdminEmployeesViewModel {
    pub employees: EmployeesResource,
    pub table: TableState,
    pub form: RwSignal<EmployeeFormInput>,
    pub form_open: RwSignal<bool>,
    pub editing: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub save_action: Action<(Option<String>, EmployeeFormInput), Result<(), ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl AdminEmployeesViewModel {
    pub fn rows(&self) -> Signal<Vec<Employee>> {
        let data = self.employees.data();
        Signal::derive(move || data.get().unwrap_or_default())
    }

    pub fn open_create(&self) {
        self.editing.set(None);
        self.form.set(EmployeeFormInput::default());
        self.form_open.set(true);
    }

    pub fn open_edit(&self, employee: &Employee) {
        self.editing.set(Some(employee.id.clone()));
        self.form.set(EmployeeFormInput::from(employee));
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
    }
}

pub fn use_admin_employees_view_model() -> AdminEmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let employees = employees_resource(repository.clone());
    employees.load(());

    let repo_for_save = repository.clone();
    let save_action = create_action(move |(editing, input): &(Option<String>, EmployeeFormInput)| {
        save_employee(
            repo_for_save.clone(),
            employees,
            toasts,
            editing.clone(),
            input.clone(),
        )
    });
    let delete_action = create_action(move |id: &String| {
        remove_employee(repository.clone(), employees, toasts, id.clone())
    });

    let form_open = create_rw_signal(false);
    let pending_delete = create_rw_signal(None::<Employee>);

    create_effect(move |_| {
        if let Some(Ok(())) = save_action.value().get() {
            form_open.set(false);
        }
    });
    create_effect(move |_| {
        if let Some(outcome) = delete_action.value().get() {
            settle_delete(pending_delete, &outcome);
        }
    });

    AdminEmployeesViewModel {
        employees,
        table: TableState::with_default_page_size(),
        form: create_rw_signal(EmployeeFormInput::default()),
        form_open,
        editing: create_rw_signal(None),
        pending_delete,
        save_action,
        delete_action,
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::ssr::with_runtime_async;
    use serde_json::json;

    fn jane() -> serde_json::Value {
        json!({ "id": "e1", "first_name": "Jane", "last_name": "Doe", "email": "jane@example.com", "role": "EMPLOYEE" })
    }

    #[tokio::test]
    async fn delete_reloads_list_after_confirmation() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(envelope(200, json!([jane()])));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/e1");
            then.status(200).json_body(envelope(200, json!(null)));
        });

        with_runtime_async(|| async move {
            let repo = EmployeesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
                server.url("/api"),
            )));
            let employees = employees_resource(repo.clone());
            employees.fetch(()).await;
            assert_eq!(employees.data().get_untracked().map(|e| e.len()), Some(1));

            server.mock(|when, then| {
                when.method(GET).path("/api/employees");
                then.status(200).json_body(envelope(200, json!([])));
            });
            remove_employee(repo, employees, ToastStore::new(), "e1".into())
                .await
                .unwrap();
            assert_eq!(employees.data().get_untracked(), Some(vec![]));
        })
        .await;
    }

    #[tokio::test]
    async fn rejected_delete_keeps_confirmation_open() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(envelope(200, json!([jane()])));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/e1");
            then.status(409).json_body(rejection(409, "Employee has open leave requests"));
        });

        with_runtime_async(|| async move {
            let repo = EmployeesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
                server.url("/api"),
            )));
            let employees = employees_resource(repo.clone());
            let toasts = ToastStore::new();
            employees.fetch(()).await;
            let target = employees.data().get_untracked().unwrap().remove(0);
            let pending_delete = create_rw_signal(Some(target.clone()));

            let outcome = remove_employee(repo, employees, toasts, target.id.clone()).await;
            settle_delete(pending_delete, &outcome);

            assert!(outcome.is_err());
            assert_eq!(pending_delete.get_untracked(), Some(target));
            assert_eq!(
                toasts.toasts().get_untracked()[0].message,
                "Employee has open leave requests"
            );
        })
        .await;
    }

    #[test]
    fn accepted_delete_closes_confirmation() {
        crate::test_support::ssr::with_runtime(|| {
            let pending_delete = create_rw_signal(Some(Employee {
                id: "e1".into(),
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                email: "jane@example.com".into(),
                department: None,
                position: None,
                role: Role::Employee,
                hired_on: None,
            }));
            settle_delete(pending_delete, &Ok(()));
            assert_eq!(pending_delete.get_untracked(), None);
        });
    }

    #[tokio::test]
    async fn create_needs_201() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(envelope(200, json!([])));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/employees");
            then.status(200).json_body(rejection(409, "Email already registered"));
        });

        with_runtime_async(|| async move {
            let repo = EmployeesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
                server.url("/api"),
            )));
            let employees = employees_resource(repo.clone());
            let toasts = ToastStore::new();
            employees.fetch(()).await;

            let input = EmployeeFormInput {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                email: "jane@example.com".into(),
                password: "correct-horse".into(),
                ..EmployeeFormInput::default()
            };
            let err = save_employee(repo, employees, toasts, None, input)
                .await
                .unwrap_err();
            assert_eq!(err.user_message("x"), "Email already registered");
            assert_eq!(
                toasts.toasts().get_untracked()[0].message,
                "Email already registered"
            );
        })
        .await;
    }
}
