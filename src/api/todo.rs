//! To-do Operations

use serde::Serialize;

use super::graphql::{GraphQlClient, NoArgs, Operation};
use crate::error::ApiResult;
use crate::models::{Item, ToggledItem};

pub const TODOS: Operation = Operation {
    name: "Todos",
    document: "query Todos {
  todos {
    id
    title
    completed
  }
}",
    root: "todos",
};

pub const ADD_TODO: Operation = Operation {
    name: "AddTodo",
    document: "mutation AddTodo($title: String!) {
  addTodo(title: $title) {
    id
    title
    completed
  }
}",
    root: "addTodo",
};

pub const TOGGLE_TODO: Operation = Operation {
    name: "ToggleTodo",
    document: "mutation ToggleTodo($id: ID!) {
  toggleTodo(id: $id) {
    id
    completed
  }
}",
    root: "toggleTodo",
};

pub const DELETE_TODO: Operation = Operation {
    name: "DeleteTodo",
    document: "mutation DeleteTodo($id: ID!) {
  deleteTodo(id: $id)
}",
    root: "deleteTodo",
};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct TitleArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

// ========================
// Operations
// ========================

pub async fn list_items(client: &GraphQlClient) -> ApiResult<Vec<Item>> {
    client.execute(&TODOS, &NoArgs {}).await
}

pub async fn add_item(client: &GraphQlClient, title: &str) -> ApiResult<Item> {
    client.execute(&ADD_TODO, &TitleArgs { title }).await
}

pub async fn toggle_item(client: &GraphQlClient, id: &str) -> ApiResult<ToggledItem> {
    client.execute(&TOGGLE_TODO, &IdArgs { id }).await
}

pub async fn delete_item(client: &GraphQlClient, id: &str) -> ApiResult<bool> {
    client.execute(&DELETE_TODO, &IdArgs { id }).await
}
