//! Demo data seeding for local development.

use tracing::info;

use orghub_core::AppResult;
use orghub_core::types::TenantId;
use orghub_entity::department::CreateDepartment;
use orghub_entity::employee::CreateEmployee;

use crate::department::DepartmentStore;
use crate::employee::EmployeeStore;

/// Populate the stores with a small org: three root departments, one
/// nested team, and a handful of employees.
pub async fn seed_demo_data(
    departments: &DepartmentStore,
    employees: &EmployeeStore,
    tenant_id: TenantId,
) -> AppResult<()> {
    let hr = departments
        .create(CreateDepartment {
            tenant_id,
            name: "Human Resources".to_string(),
            description: Some("People operations and talent management".to_string()),
            ..CreateDepartment::default()
        })
        .await?;

    departments
        .create(CreateDepartment {
            tenant_id,
            name: "Information Technology".to_string(),
            description: Some("Internal IT and infrastructure".to_string()),
            ..CreateDepartment::default()
        })
        .await?;

    let engineering = departments
        .create(CreateDepartment {
            tenant_id,
            name: "Engineering".to_string(),
            description: Some("Product engineering".to_string()),
            ..CreateDepartment::default()
        })
        .await?;

    departments
        .create(CreateDepartment {
            tenant_id,
            name: "Platform Engineering".to_string(),
            description: Some("Infrastructure and developer platform".to_string()),
            parent_department_id: Some(engineering.id),
            ..CreateDepartment::default()
        })
        .await?;

    employees
        .create(CreateEmployee {
            nik: "EMP-0001".to_string(),
            name: "Budi Santoso".to_string(),
            position_code: "HRM1".to_string(),
            position_name: "HR Manager".to_string(),
            department: hr.name.clone(),
            email: Some("budi.santoso@example.com".to_string()),
            ..CreateEmployee::default()
        })
        .await?;

    employees
        .create(CreateEmployee {
            nik: "EMP-0002".to_string(),
            name: "Siti Rahayu".to_string(),
            position_code: "ENG2".to_string(),
            position_name: "Software Engineer".to_string(),
            department: engineering.name.clone(),
            email: Some("siti.rahayu@example.com".to_string()),
            ..CreateEmployee::default()
        })
        .await?;

    employees
        .create(CreateEmployee {
            nik: "EMP-0003".to_string(),
            name: "Agus Wijaya".to_string(),
            position_code: "ENG3".to_string(),
            position_name: "Senior Software Engineer".to_string(),
            department: engineering.name,
            email: Some("agus.wijaya@example.com".to_string()),
            ..CreateEmployee::default()
        })
        .await?;

    info!(tenant_id = %tenant_id, "Demo data seeded");
    Ok(())
}
