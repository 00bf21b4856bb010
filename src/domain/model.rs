use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_slug, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
}

/// Payload accepted by `POST /api/articles/create`.
///
/// Field order is the order of the JSON rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category_slug: String,
    #[serde(default)]
    pub tag_slugs: Vec<String>,
    pub status: ArticleStatus,
    #[serde(default)]
    pub generate_cover_image: bool,
}

const SAMPLE_CONTENT: &str = r#"## L'IA au Cœur des Opérations de Flottes

En 2026, l'intelligence artificielle n'est plus une technologie futuriste pour les gestionnaires de flottes québécois – c'est une réalité opérationnelle qui transforme radicalement la façon dont nous entretenons nos véhicules.

### La Maintenance Prédictive : Un Changement de Paradigme

Selon les dernières données de l'industrie, les flottes qui ont adopté des solutions d'IA pour la maintenance prédictive ont constaté une **réduction de 35% des pannes imprévues** et une **diminution de 25% des coûts de maintenance**.

> "L'IA nous permet d'anticiper les problèmes avant qu'ils ne surviennent. Nous sommes passés d'une approche réactive à une approche proactive." - Expert en gestion de flottes

### Comment Fonctionne la Maintenance Prédictive par IA ?

1. **Collecte de données en temps réel** : Les capteurs IoT installés sur les véhicules transmettent continuellement des données sur l'état des composants critiques.

2. **Analyse par algorithmes d'apprentissage** : L'IA analyse ces données pour détecter des patterns anormaux qui précèdent généralement une défaillance.

3. **Alertes proactives** : Le système génère des alertes avant que la panne ne se produise, permettant une intervention planifiée.

4. **Optimisation des stocks** : L'IA prédit également les besoins en pièces de rechange, optimisant ainsi l'inventaire.

### Les Avantages Concrets pour Votre Flotte

| Avantage | Impact Moyen |
|----------|--------------|
| Réduction des pannes | -35% |
| Économies maintenance | -25% |
| Disponibilité véhicules | +15% |
| Durée de vie équipements | +20% |

### Se Préparer à l'Adoption de l'IA

Pour les gestionnaires de flottes qui souhaitent adopter ces technologies, voici les étapes recommandées :

- **Évaluer l'infrastructure actuelle** : Vérifiez si vos véhicules sont équipés de capteurs compatibles
- **Choisir une solution adaptée** : Optez pour une plateforme qui s'intègre à vos systèmes existants
- **Former vos équipes** : L'adoption réussie passe par la formation des mécaniciens et gestionnaires
- **Commencer petit** : Déployez d'abord sur un sous-ensemble de véhicules avant de généraliser

### Ressources FleetCrew

Pour approfondir votre compréhension de l'IA dans la gestion de flottes, consultez nos outils :

- [FleetCrew Intelligence](https://fleetcrew-kb75upsk.manus.space) - Analyse de données avancée pour votre flotte
- [FleetParts](https://fleetparts.manus.space/) - Catalogue de pièces avec recommandations IA
- [Gestion d'Inventaire](https://8xhpiqcen0qp.manus.space) - Optimisation des stocks de pièces

### Conclusion

L'intelligence artificielle représente une opportunité majeure pour les gestionnaires de flottes au Québec. En adoptant ces technologies dès maintenant, vous positionnez votre entreprise à l'avant-garde de l'industrie tout en réalisant des économies substantielles.

*Article généré automatiquement par le système de publication FleetCrew Blog*
"#;

impl ArticleDraft {
    /// 內建的測試文章
    pub fn sample() -> Self {
        Self {
            title: "L'Intelligence Artificielle Révolutionne la Maintenance des Flottes en 2026"
                .to_string(),
            slug: "ia-revolution-maintenance-flottes-2026".to_string(),
            excerpt: "Découvrez comment l'IA transforme la maintenance prédictive des véhicules lourds au Québec, réduisant les coûts et augmentant la disponibilité des flottes.".to_string(),
            content: SAMPLE_CONTENT.to_string(),
            category_slug: "intelligence-artificielle".to_string(),
            tag_slugs: vec![
                "ia".to_string(),
                "maintenance-predictive".to_string(),
                "innovation".to_string(),
            ],
            status: ArticleStatus::Published,
            generate_cover_image: true,
        }
    }
}

impl Validate for ArticleDraft {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("title", &self.title)?;
        validate_non_empty_string("excerpt", &self.excerpt)?;
        validate_non_empty_string("content", &self.content)?;
        validate_slug("slug", &self.slug)?;
        validate_slug("categorySlug", &self.category_slug)?;
        for tag in &self.tag_slugs {
            validate_slug("tagSlugs", tag)?;
        }
        Ok(())
    }
}
