pub const COUNT_USERS_BY_USERNAME: &str = "
    SELECT COUNT(*)
    FROM users
    WHERE
        username = ?1
";

pub const INSERT_USER: &str = "
    INSERT INTO users (
        username,
        password_hash
    )
    VALUES (?1, ?2)
";

pub const SELECT_USER_BY_USERNAME: &str = "
    SELECT
        user_id,
        username,
        password_hash
    FROM users
    WHERE
        username = ?1
";

pub const INSERT_TASK: &str = "
    INSERT INTO tasks (
        user_id,
        title,
        description,
        due_date,
        is_completed
    )
    VALUES (?1, ?2, ?3, ?4, ?5)
";

pub const DELETE_TASK: &str = "
    DELETE FROM tasks
    WHERE
        user_id = ?1
        AND task_id = ?2
";

pub const SELECT_USER_TASKS: &str = "
    SELECT
        task_id,
        user_id,
        title,
        description,
        due_date,
        is_completed
    FROM tasks
    WHERE
        user_id = ?1
";
