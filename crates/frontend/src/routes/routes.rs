use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a002_reservation::flow::FlowStep;
use crate::domain::a002_reservation::ui::admin_list::AdminReservationList;
use crate::domain::a002_reservation::ui::final_step::ReservationComplete;
use crate::domain::a002_reservation::ui::guard::StepGuard;
use crate::domain::a002_reservation::ui::manager_list::AssignedReservationList;
use crate::domain::a002_reservation::ui::my_list::MyReservationList;
use crate::domain::a002_reservation::ui::step_one::ReservationStepOne;
use crate::domain::a002_reservation::ui::step_two::ReservationStepTwo;
use crate::domain::a003_account::ui::admin::AccountList;
use crate::domain::a004_notice::ui::admin::NoticeList;
use crate::domain::a004_notice::ui::board::NoticeBoard;
use crate::domain::a005_banner::ui::admin::BannerList;
use crate::domain::a006_inquiry::ui::admin::InquiryList;
use crate::domain::a006_inquiry::ui::my_inquiries::MyInquiryList;
use crate::domain::a007_review::ui::admin::ReviewList;
use crate::domain::a008_customer::ui::admin::CustomerList;
use crate::domain::a009_manager::ui::admin::ManagerList;
use crate::layout::Shell;
use crate::system::auth::guard::{RequireAuth, RequireRole};
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"페이지를 찾을 수 없습니다"</h1>
            <a href="/" class="button button--secondary">"홈으로"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/notices") view=NoticeBoard />

                    // customer
                    <Route
                        path=path!("/reservations/new")
                        view=|| view! { <RequireRole role=Role::Customer><ReservationStepOne /></RequireRole> }
                    />
                    <Route
                        path=path!("/reservations/:id/step-2")
                        view=|| view! {
                            <RequireRole role=Role::Customer>
                                <StepGuard step=FlowStep::ManagerSelection><ReservationStepTwo /></StepGuard>
                            </RequireRole>
                        }
                    />
                    <Route
                        path=path!("/reservations/:id/complete")
                        view=|| view! {
                            <RequireRole role=Role::Customer>
                                <StepGuard step=FlowStep::Summary><ReservationComplete /></StepGuard>
                            </RequireRole>
                        }
                    />
                    <Route
                        path=path!("/reservations/me")
                        view=|| view! { <RequireRole role=Role::Customer><MyReservationList /></RequireRole> }
                    />
                    <Route
                        path=path!("/inquiries/me")
                        view=|| view! { <RequireAuth><MyInquiryList /></RequireAuth> }
                    />

                    // manager
                    <Route
                        path=path!("/manager/reservations")
                        view=|| view! { <RequireRole role=Role::Manager><AssignedReservationList /></RequireRole> }
                    />

                    // admin
                    <Route
                        path=path!("/admin/reservations")
                        view=|| view! { <RequireRole role=Role::Admin><AdminReservationList /></RequireRole> }
                    />
                    <Route
                        path=path!("/admin/accounts")
                        view=|| view! { <RequireRole role=Role::Admin><AccountList /></RequireRole> }
                    />
                    <Route
                        path=path!("/admin/notices")
                        view=|| view! { <RequireRole role=Role::Admin><NoticeList /></RequireRole> }
                    />
                    <Route
                        path=path!("/admin/banners")
                        view=|| view! { <RequireRole role=Role::Admin><BannerList /></RequireRole> }
                    />
                    <Route
                        path=path!("/admin/inquiries")
                        view=|| view! { <RequireRole role=Role::Admin><InquiryList /></RequireRole> }
                    />
                    <Route
                        path=path!("/admin/reviews")
                        view=|| view! { <RequireRole role=Role::Admin><ReviewList /></RequireRole> }
                    />
                    <Route
                        path=path!("/admin/customers")
                        view=|| view! { <RequireRole role=Role::Admin><CustomerList /></RequireRole> }
                    />
                    <Route
                        path=path!("/admin/managers")
                        view=|| view! { <RequireRole role=Role::Admin><ManagerList /></RequireRole> }
                    />
                </Routes>
            </Shell>
        </Router>
    }
}
