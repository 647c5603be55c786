//! 라우트 결정기.
//!
//! URL 프래그먼트에서 라우트를 파생하고 문서 제목/스크롤을 동기화한다.

use mytv_core::models::route::Route;
use mytv_core::ports::document::DocumentSurface;
use mytv_core::ports::navigation::NavigationSource;
use mytv_core::subscription::Subscription;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

/// 라우트 결정기
pub struct RouteResolver {
    navigation: Arc<dyn NavigationSource>,
    route_tx: Arc<watch::Sender<Route>>,
    subscription: Subscription,
}

impl RouteResolver {
    /// 프래그먼트 → 라우트 (순수 함수)
    pub fn resolve(fragment: &str) -> Route {
        Route::from_fragment(fragment)
    }

    /// 프래그먼트 변경 리스너를 등록하고 현재 프래그먼트를 즉시 한 번 적용한다
    pub fn start(
        navigation: Arc<dyn NavigationSource>,
        document: Arc<dyn DocumentSurface>,
    ) -> Self {
        let (route_tx, _) = watch::channel(Route::default());
        let route_tx = Arc::new(route_tx);

        let listener_tx = route_tx.clone();
        let listener_doc = document.clone();
        let subscription = navigation.on_fragment_change(Box::new(move |fragment: &str| {
            apply_fragment(&listener_tx, listener_doc.as_ref(), fragment);
        }));

        let initial = navigation.current_fragment();
        apply_fragment(&route_tx, document.as_ref(), &initial);
        info!("초기 라우트: {:?}", *route_tx.borrow());

        Self {
            navigation,
            route_tx,
            subscription,
        }
    }

    /// 현재 라우트
    pub fn current(&self) -> Route {
        *self.route_tx.borrow()
    }

    /// 라우트 변경 수신기
    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.route_tx.subscribe()
    }

    /// 라우트 이동 명령. 프래그먼트를 바꾸며, 결과는 변경 이벤트로 돌아온다.
    pub fn navigate(&self, route: Route) {
        debug!("라우트 이동 요청: {route:?}");
        self.navigation.set_fragment(route.fragment());
    }

    /// 프래그먼트 리스너 해제 (멱등)
    pub fn shutdown(&self) {
        self.subscription.unsubscribe();
    }
}

fn apply_fragment(tx: &watch::Sender<Route>, document: &dyn DocumentSurface, fragment: &str) {
    let route = RouteResolver::resolve(fragment);
    document.set_title(route.document_title());
    document.scroll_to_origin();

    tx.send_if_modified(|current| {
        if *current == route {
            return false;
        }
        debug!("라우트 변경: {:?} → {:?}", *current, route);
        *current = route;
        true
    });
}
