//! Process-lifetime storage for todos.
//!
//! Handlers only see the [`TodoStore`] trait, so tests can hand the router a
//! different implementation. [`InMemoryTodoStore`] keeps items in insertion
//! order behind a tokio `RwLock`; writers serialise, readers share.

use std::future::Future;

use tokio::sync::RwLock;

use crate::model::Todo;

/// The capabilities the HTTP layer needs from a backing store.
pub trait TodoStore: Send + Sync + 'static {
    /// Append `todo` unconditionally and hand it back.
    fn add(&self, todo: Todo) -> impl Future<Output = Todo> + Send;

    /// First stored item with a matching id, in insertion order.
    fn get_by_id(&self, id: i32) -> impl Future<Output = Option<Todo>> + Send;

    /// Every stored item, in insertion order.
    fn list(&self) -> impl Future<Output = Vec<Todo>> + Send;

    /// Remove every item with a matching id. Missing ids are not an error.
    fn delete_by_id(&self, id: i32) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items, duplicates included.
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

impl TodoStore for InMemoryTodoStore {
    async fn add(&self, todo: Todo) -> Todo {
        self.todos.write().await.push(todo.clone());
        todo
    }

    async fn get_by_id(&self, id: i32) -> Option<Todo> {
        let todos = self.todos.read().await;
        todos.iter().find(|todo| todo.id == id).cloned()
    }

    async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    async fn delete_by_id(&self, id: i32) {
        self.todos.write().await.retain(|todo| todo.id != id);
    }
}
