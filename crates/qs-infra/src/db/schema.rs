diesel::table! {
    t_project (id) {
        id -> BigInt,
        name -> Text,
        floor_area_m2 -> Nullable<Text>,
        contingency_percentage -> Text,
        created_at_ms -> BigInt,
    }
}

diesel::table! {
    t_category (id) {
        id -> BigInt,
        code -> Text,
        name -> Text,
        sort_order -> Integer,
    }
}

diesel::table! {
    t_sub_element (id) {
        id -> BigInt,
        category_id -> BigInt,
        code -> Text,
        name -> Text,
    }
}

diesel::table! {
    t_cost_item (id) {
        id -> BigInt,
        sub_element_id -> BigInt,
        code -> Text,
        description -> Text,
        unit_code -> Text,
        unit_name -> Text,
        material_cost -> Text,
        management_cost -> Text,
        contractor_cost -> Text,
        is_contractor_required -> Bool,
        waste_factor -> Text,
    }
}

diesel::table! {
    t_estimate_line_item (id) {
        id -> BigInt,
        project_id -> BigInt,
        cost_item_id -> Nullable<BigInt>,
        unit_cost_override -> Nullable<Text>,
        custom_description -> Nullable<Text>,
        custom_unit_rate -> Nullable<Text>,
        custom_unit -> Nullable<Text>,
        category_id -> Nullable<BigInt>,
        quantity -> Text,
        notes -> Nullable<Text>,
        nrm2_code -> Nullable<Text>,
        is_active -> Bool,
        version_number -> Integer,
        created_by -> Nullable<Text>,
        created_at_ms -> BigInt,
        line_total -> Text,
    }
}

diesel::joinable!(t_cost_item -> t_sub_element (sub_element_id));
diesel::joinable!(t_sub_element -> t_category (category_id));
diesel::joinable!(t_estimate_line_item -> t_project (project_id));

diesel::allow_tables_to_appear_in_same_query!(
    t_project,
    t_category,
    t_sub_element,
    t_cost_item,
    t_estimate_line_item,
);
