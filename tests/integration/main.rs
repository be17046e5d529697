//! Integration tests exercising the full HTTP stack.

mod helpers;

mod department_test;
mod employee_test;
mod hierarchy_test;
