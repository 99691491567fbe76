pub mod admin_list;
pub mod final_step;
pub mod guard;
pub mod manager_list;
pub mod my_list;
pub mod step_one;
pub mod step_two;
