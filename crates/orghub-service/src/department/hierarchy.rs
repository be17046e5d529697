//! Hierarchy resolution: ancestor paths, child listings, and trees.

use std::sync::Arc;

use orghub_core::config::directory::DirectoryConfig;
use orghub_core::types::DepartmentId;
use orghub_core::AppResult;
use orghub_entity::department::{Department, DepartmentTreeNode};
use orghub_store::DepartmentStore;

use crate::context::RequestContext;

/// Resolves parent chains and builds department trees.
///
/// All resolution happens over a tenant-scoped snapshot, so a path or tree
/// can never cross tenants.
#[derive(Debug, Clone)]
pub struct HierarchyService {
    /// Department store.
    store: Arc<DepartmentStore>,
    /// Directory settings (default tree depth).
    config: DirectoryConfig,
}

impl HierarchyService {
    /// Creates a new hierarchy service.
    pub fn new(store: Arc<DepartmentStore>, config: DirectoryConfig) -> Self {
        Self { store, config }
    }

    /// Resolves the ancestor path of a department, root first, the
    /// department itself last.
    ///
    /// Unknown IDs resolve to an empty path. A visited set terminates the
    /// walk if the stored links ever formed a cycle, so resolution cannot
    /// loop.
    pub async fn get_path(
        &self,
        ctx: &RequestContext,
        id: DepartmentId,
    ) -> AppResult<Vec<Department>> {
        let rows = self.store.find_by_tenant(ctx.tenant_id).await;

        let mut path = Vec::new();
        let mut visited = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if visited.contains(&current) {
                break;
            }
            visited.push(current);
            let Some(dept) = rows.iter().find(|d| d.id == current) else {
                break;
            };
            cursor = dept.parent_department_id;
            path.push(dept.clone());
        }
        path.reverse();
        Ok(path)
    }

    /// Lists direct children of `parent_id`; `None` lists root departments.
    pub async fn get_children(
        &self,
        ctx: &RequestContext,
        parent_id: Option<DepartmentId>,
    ) -> AppResult<Vec<Department>> {
        let children = self
            .store
            .find_by_tenant(ctx.tenant_id)
            .await
            .into_iter()
            .filter(|d| d.parent_department_id == parent_id)
            .collect();
        Ok(children)
    }

    /// Builds the department tree down to `depth` levels (roots are level 1).
    ///
    /// With `root_id` set the result is that single subtree; an unknown root
    /// yields an empty forest. Without it, one tree per root department.
    pub async fn get_tree(
        &self,
        ctx: &RequestContext,
        root_id: Option<DepartmentId>,
        depth: Option<u32>,
    ) -> AppResult<Vec<DepartmentTreeNode>> {
        let rows = self.store.find_by_tenant(ctx.tenant_id).await;
        let depth = depth.unwrap_or(self.config.default_tree_depth);
        if depth == 0 {
            return Ok(Vec::new());
        }

        let forest = match root_id {
            Some(id) => rows
                .iter()
                .filter(|d| d.id == id)
                .map(|d| build_node(d, &rows, 1, depth))
                .collect(),
            None => rows
                .iter()
                .filter(|d| d.is_root())
                .map(|d| build_node(d, &rows, 1, depth))
                .collect(),
        };
        Ok(forest)
    }
}

fn build_node(
    dept: &Department,
    rows: &[Department],
    level: u32,
    depth: u32,
) -> DepartmentTreeNode {
    let children = if level < depth {
        rows.iter()
            .filter(|d| d.parent_department_id == Some(dept.id))
            .map(|child| build_node(child, rows, level + 1, depth))
            .collect()
    } else {
        Vec::new()
    };

    DepartmentTreeNode {
        id: dept.id,
        code: dept.code.clone(),
        name: dept.name.clone(),
        status: dept.status,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orghub_core::types::TenantId;
    use orghub_entity::department::CreateDepartment;
    use orghub_store::DepartmentStoreOptions;

    async fn org() -> (HierarchyService, RequestContext, Vec<Department>) {
        let store = Arc::new(DepartmentStore::new(DepartmentStoreOptions::default()));
        let ctx = RequestContext::system(TenantId::new());

        // A -> B -> C, plus a second root D.
        let a = store
            .create(CreateDepartment {
                tenant_id: ctx.tenant_id,
                name: "A".to_string(),
                ..CreateDepartment::default()
            })
            .await
            .expect("create");
        let b = store
            .create(CreateDepartment {
                tenant_id: ctx.tenant_id,
                name: "B".to_string(),
                parent_department_id: Some(a.id),
                ..CreateDepartment::default()
            })
            .await
            .expect("create");
        let c = store
            .create(CreateDepartment {
                tenant_id: ctx.tenant_id,
                name: "C".to_string(),
                parent_department_id: Some(b.id),
                ..CreateDepartment::default()
            })
            .await
            .expect("create");
        let d = store
            .create(CreateDepartment {
                tenant_id: ctx.tenant_id,
                name: "D".to_string(),
                ..CreateDepartment::default()
            })
            .await
            .expect("create");

        let service = HierarchyService::new(store, DirectoryConfig::default());
        (service, ctx, vec![a, b, c, d])
    }

    #[tokio::test]
    async fn test_path_is_rooted_first() {
        let (service, ctx, depts) = org().await;
        let path = service.get_path(&ctx, depts[2].id).await.expect("path");
        let names: Vec<&str> = path.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_path_of_unknown_id_is_empty() {
        let (service, ctx, _) = org().await;
        let path = service
            .get_path(&ctx, DepartmentId::new())
            .await
            .expect("path");
        assert!(path.is_empty());
    }

    #[tokio::test]
    async fn test_children_of_none_are_roots() {
        let (service, ctx, depts) = org().await;
        let roots = service.get_children(&ctx, None).await.expect("children");
        let mut names: Vec<&str> = roots.iter().map(|d| d.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["A", "D"]);

        let children = service
            .get_children(&ctx, Some(depts[0].id))
            .await
            .expect("children");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "B");
    }

    #[tokio::test]
    async fn test_tree_respects_depth_bound() {
        let (service, ctx, _) = org().await;

        let forest = service.get_tree(&ctx, None, Some(2)).await.expect("tree");
        let a = forest.iter().find(|n| n.name == "A").expect("root A");
        assert_eq!(a.children.len(), 1);
        assert_eq!(a.children[0].name, "B");
        // C sits at level 3, beyond the bound.
        assert!(a.children[0].children.is_empty());

        let full = service.get_tree(&ctx, None, None).await.expect("tree");
        let a = full.iter().find(|n| n.name == "A").expect("root A");
        assert_eq!(a.children[0].children[0].name, "C");
    }

    #[tokio::test]
    async fn test_tree_from_explicit_root() {
        let (service, ctx, depts) = org().await;
        let forest = service
            .get_tree(&ctx, Some(depts[1].id), None)
            .await
            .expect("tree");
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].name, "B");
        assert_eq!(forest[0].children[0].name, "C");

        let empty = service
            .get_tree(&ctx, Some(DepartmentId::new()), None)
            .await
            .expect("tree");
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_resolution_never_crosses_tenants() {
        let (service, _, depts) = org().await;
        let other = RequestContext::system(TenantId::new());
        assert!(service
            .get_path(&other, depts[2].id)
            .await
            .expect("path")
            .is_empty());
        assert!(service
            .get_children(&other, None)
            .await
            .expect("children")
            .is_empty());
        assert!(service.get_tree(&other, None, None).await.expect("tree").is_empty());
    }
}
