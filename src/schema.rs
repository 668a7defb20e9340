diesel::table! {
    users (id) {
        id -> Integer,
        username -> Text,
    }
}

diesel::table! {
    subscriptions (id) {
        id -> Integer,
        user_id -> Integer,
        name -> Text,
        amount -> Double,
        period -> Text,
        start_date -> Date,
        is_active -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    audit_logs (id) {
        id -> Integer,
        user_id -> Integer,
        action -> Text,
        subscription_id -> Integer,
        details -> Text,
        created_at -> Timestamp,
    }
}

diesel::joinable!(subscriptions -> users (user_id));
diesel::joinable!(audit_logs -> subscriptions (subscription_id));

diesel::allow_tables_to_appear_in_same_query!(users, subscriptions, audit_logs);
